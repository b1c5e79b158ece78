//! Gets information about a bot user.
//!
//! Wraps https://api.slack.com/methods/bots.info

use std::collections::HashMap;
use std::convert::TryFrom;

use chrono::{DateTime, Utc};

use crate::http::{decode, Error};
use crate::id::*;

/// Query parameters for `bots.info`.
///
/// Calling without a `bot` is allowed but Slack then answers `ok` with no bot,
/// which [`InfoResponse`] refuses to decode.
#[derive(Clone, Debug, Serialize, new)]
pub struct InfoRequest {
    /// Bot user to get info on
    #[new(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotId>,
    /// Encoded team id or enterprise id where the bot exists, for org tokens
    #[new(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// The result of a `bots.info` call.
///
/// Wire form is an object discriminated by `ok`: `true` carries `bot`, `false`
/// carries `error`. A body where `ok` disagrees with the payload fails to
/// decode. Fields other than `ok`, `bot` and `error` are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawInfoResponse", into = "RawInfoResponse")]
pub enum InfoResponse {
    /// `"ok": true`, with the bot that was asked about
    Success { bot: Bot },
    /// `"ok": false`, with Slack's error code, like `bot_not_found`
    Failure { error: String },
}

/// Metadata for one bot, as Slack sends it.
///
/// Ids are kept exactly as they arrive; [`bot_id`](Bot::bot_id) and friends
/// give the typed versions when they are well formed.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Bot {
    pub id: String,
    pub deleted: bool,
    pub name: String,
    /// Seconds since the Unix epoch
    pub updated: i64,
    pub app_id: String,
    /// Only set for bots backed by a user account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Icon URLs keyed by size label, like `image_72`
    pub icons: HashMap<String, String>,
}

impl Bot {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.updated, 0)
    }

    pub fn icon(&self, size: &str) -> Option<&str> {
        self.icons.get(size).map(String::as_str)
    }

    pub fn bot_id(&self) -> Result<BotId, InvalidId> {
        BotId::try_from(self.id.as_str())
    }

    pub fn app(&self) -> Result<AppId, InvalidId> {
        AppId::try_from(self.app_id.as_str())
    }

    /// `None` when the bot has no user account
    pub fn user(&self) -> Option<Result<UserId, InvalidId>> {
        self.user_id.as_ref().map(|id| UserId::try_from(id.as_str()))
    }
}

impl InfoResponse {
    /// Decode a raw `bots.info` response body.
    ///
    /// An `"ok": false` body is a successful decode; use
    /// [`into_result`](InfoResponse::into_result) to turn it into an error.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        decode(body)
    }

    pub fn is_ok(&self) -> bool {
        match self {
            InfoResponse::Success { .. } => true,
            InfoResponse::Failure { .. } => false,
        }
    }

    pub fn bot(&self) -> Option<&Bot> {
        match self {
            InfoResponse::Success { bot } => Some(bot),
            InfoResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            InfoResponse::Success { .. } => None,
            InfoResponse::Failure { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<Bot, Error> {
        match self {
            InfoResponse::Success { bot } => Ok(bot),
            InfoResponse::Failure { error } => Err(Error::Slack(error)),
        }
    }
}

// Flat wire form, only used to get in and out of the enum
#[derive(Deserialize, Serialize)]
struct RawInfoResponse {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bot: Option<Bot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TryFrom<RawInfoResponse> for InfoResponse {
    type Error = String;

    fn try_from(raw: RawInfoResponse) -> Result<Self, String> {
        match raw {
            RawInfoResponse {
                ok: true,
                bot: Some(bot),
                error: None,
            } => Ok(InfoResponse::Success { bot }),
            RawInfoResponse {
                ok: false,
                bot: None,
                error: Some(error),
            } => Ok(InfoResponse::Failure { error }),
            RawInfoResponse { ok: true, bot: None, .. } => {
                Err("\"ok\": true without a \"bot\"".to_string())
            }
            RawInfoResponse {
                ok: false,
                error: None,
                ..
            } => Err("\"ok\": false without an \"error\"".to_string()),
            RawInfoResponse { ok, .. } => Err(format!(
                "\"ok\": {} with both \"bot\" and \"error\"",
                ok
            )),
        }
    }
}

impl From<InfoResponse> for RawInfoResponse {
    fn from(response: InfoResponse) -> Self {
        match response {
            InfoResponse::Success { bot } => RawInfoResponse {
                ok: true,
                bot: Some(bot),
                error: None,
            },
            InfoResponse::Failure { error } => RawInfoResponse {
                ok: false,
                bot: None,
                error: Some(error),
            },
        }
    }
}
