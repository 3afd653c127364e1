use crate::constants::*;
use sqsign_core::utils::Redact;
use sqsign_core::Context;
use std::fmt::{Debug, Formatter};

/// Region names of the classic AWS regions.
pub mod region {
    /// US East (N. Virginia)
    pub const VIRGINIA: &str = "us-east-1";
    /// US West (N. California)
    pub const CALIFORNIA: &str = "us-west-1";
    /// US West (Oregon)
    pub const OREGON: &str = "us-west-2";
    /// EU (Ireland)
    pub const IRELAND: &str = "eu-west-1";
    /// Asia Pacific (Singapore)
    pub const SINGAPORE: &str = "ap-southeast-1";
    /// Asia Pacific (Sydney)
    pub const SYDNEY: &str = "ap-southeast-2";
    /// Asia Pacific (Tokyo)
    pub const TOKYO: &str = "ap-northeast-1";
    /// South America (São Paulo)
    pub const SAO_PAULO: &str = "sa-east-1";
}

/// Config for aws services.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    /// - env value: [`AWS_ACCESS_KEY`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// `endpoint` overrides the host requests are sent to, loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SQSIGN_SQS_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `scheme` is `https` unless set to `http`.
    pub scheme: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("endpoint", &self.endpoint)
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl Config {
    /// Fill the unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.region.is_none() {
            self.region = envs
                .get(AWS_REGION)
                .or_else(|| envs.get(AWS_DEFAULT_REGION))
                .cloned();
        }
        if self.access_key_id.is_none() {
            self.access_key_id = envs
                .get(AWS_ACCESS_KEY_ID)
                .or_else(|| envs.get(AWS_ACCESS_KEY))
                .cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(AWS_SECRET_ACCESS_KEY).cloned();
        }
        if self.session_token.is_none() {
            self.session_token = envs.get(AWS_SESSION_TOKEN).cloned();
        }
        if self.endpoint.is_none() {
            self.endpoint = envs.get(SQSIGN_SQS_ENDPOINT).cloned();
        }

        self
    }
}
