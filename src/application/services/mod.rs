mod merge_request_dependencies;

pub use merge_request_dependencies::MergeRequestDependenciesService;
