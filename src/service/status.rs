//! Client for the upstream account-status API.
//!
//! The ban-appeal endpoint authenticates with an `ACT_SSO_COOKIE` session
//! cookie plus a small set of browser-emulating headers. An empty response
//! body means the credential has expired upstream; that is reported as the
//! `invalid_cookie` status, not as an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    error::classify::ClassifyError,
    model::account::{AccountAge, Status},
};

const BAN_APPEAL_URL: &str = "https://support.activision.com/api/bans/appeal?locale=en";
const PROFILE_URL: &str = "https://support.activision.com/api/profile?accts=false";

/// Response shape of the ban-appeal endpoint.
#[derive(Debug, Deserialize)]
struct BanAppealResponse {
    #[serde(default)]
    bans: Vec<BanEntry>,
}

#[derive(Debug, Deserialize)]
struct BanEntry {
    enforcement: String,
}

/// Response shape of the profile endpoint; only the creation date is used.
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    created: String,
}

/// Operations against the upstream account-status API.
///
/// The poller and the slash commands depend on this trait rather than on the
/// concrete client, so tests can substitute a stub.
#[async_trait]
pub trait BanApi: Send + Sync {
    /// Classifies the current ban status of the account behind a credential.
    async fn check_status(&self, sso_cookie: &str) -> Result<Status, ClassifyError>;

    /// Looks up the approximate age of the account behind a credential.
    async fn account_age(&self, sso_cookie: &str) -> Result<AccountAge, ClassifyError>;

    /// Checks whether a credential is currently accepted upstream.
    async fn verify_cookie(&self, sso_cookie: &str) -> Result<bool, ClassifyError>;
}

/// Production client for the Activision support API.
pub struct ActivisionClient {
    http: reqwest::Client,
}

impl ActivisionClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Builds an authenticated GET request with the browser-emulating header set.
    fn get(&self, url: &str, sso_cookie: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("accept", "*/*")
            .header("sec-fetch-mode", "cors")
            .header("x-requested-with", "XMLHttpRequest")
            .header("cookie", format!("ACT_SSO_COOKIE={}", sso_cookie))
    }
}

#[async_trait]
impl BanApi for ActivisionClient {
    async fn check_status(&self, sso_cookie: &str) -> Result<Status, ClassifyError> {
        let body = self
            .get(BAN_APPEAL_URL, sso_cookie)
            .send()
            .await?
            .text()
            .await?;

        classify_ban_response(&body)
    }

    async fn account_age(&self, sso_cookie: &str) -> Result<AccountAge, ClassifyError> {
        let body = self
            .get(PROFILE_URL, sso_cookie)
            .send()
            .await?
            .text()
            .await?;

        let profile: ProfileResponse = serde_json::from_str(&body)?;
        let created = DateTime::parse_from_rfc3339(&profile.created)?.with_timezone(&Utc);

        Ok(age_from_created(created, Utc::now()))
    }

    async fn verify_cookie(&self, sso_cookie: &str) -> Result<bool, ClassifyError> {
        let response = self.get(PROFILE_URL, sso_cookie).send().await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body = response.text().await?;
        Ok(!body.is_empty())
    }
}

/// Classifies a raw ban-appeal response body.
///
/// An empty body signals an expired credential. Otherwise the ban list is
/// scanned by severity: a `PERMANENT` enforcement wins over `UNDER_REVIEW`,
/// and anything else counts as good standing.
pub fn classify_ban_response(body: &str) -> Result<Status, ClassifyError> {
    if body.is_empty() {
        return Ok(Status::InvalidCookie);
    }

    let data: BanAppealResponse = serde_json::from_str(body)?;

    if data.bans.iter().any(|ban| ban.enforcement == "PERMANENT") {
        Ok(Status::Permaban)
    } else if data.bans.iter().any(|ban| ban.enforcement == "UNDER_REVIEW") {
        Ok(Status::Shadowban)
    } else {
        Ok(Status::Good)
    }
}

/// Computes account age from its creation date using fixed-length durations.
///
/// A day is 24 hours, a month 30 days, a year 365 days. Integer division
/// throughout, so the result drifts from calendar arithmetic on purpose.
pub fn age_from_created(created: DateTime<Utc>, now: DateTime<Utc>) -> AccountAge {
    let total_days = (now - created).num_hours() / 24;

    AccountAge {
        years: total_days / 365,
        months: (total_days / 30) % 12,
        days: total_days % 365 % 30,
    }
}
