// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{constants::*, Credential};
use async_trait::async_trait;
use sqsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads AWS credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AWS_ACCESS_KEY_ID`: The AWS access key ID, `AWS_ACCESS_KEY` is accepted as a fallback
/// - `AWS_SECRET_ACCESS_KEY`: The AWS secret access key
/// - `AWS_SESSION_TOKEN`: The AWS session token (optional)
///
/// Values that are present but malformed are reported as errors instead of
/// being skipped.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let access_key_id = envs
            .get(AWS_ACCESS_KEY_ID)
            .or_else(|| envs.get(AWS_ACCESS_KEY));
        let secret_access_key = envs.get(AWS_SECRET_ACCESS_KEY);

        let (Some(ak), Some(sk)) = (access_key_id, secret_access_key) else {
            return Ok(None);
        };

        let mut cred = Credential::new(ak, sk)
            .map_err(|e| e.with_context("source: environment variables"))?;
        if let Some(token) = envs.get(AWS_SESSION_TOKEN) {
            cred = cred.with_session_token(token)?;
        }

        Ok(Some(cred))
    }
}
