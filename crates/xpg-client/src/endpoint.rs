/// Platform API endpoint paths.
pub mod endpoints {
    pub const SIGNIN: &str = "/api/auth/signin";
    pub const GRAPHQL: &str = "/api/graphql-engine/v1/graphql";
}

/// Base URL of the hosted platform.
pub const DEFAULT_BASE_URL: &str = "https://learn.reboot01.com";
