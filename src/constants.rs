/// User agent string used in HTTP requests to identify this client to the AnimalSpotter API
pub const USER_AGENT: &str = "animal-spotter-client/0.2.0";
/// Default base URL for the AnimalSpotter REST service
pub const DEFAULT_BASE_URL: &str = "https://lambdaanimalspotter.vapor.cloud/api";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
