// Copyright 2015-2016 the slack-rs authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Typed request and response shapes for the [Slack Web
//! API](https://api.slack.com/methods) `bots.info` method.
//!
//! Nothing in here talks to the network. Bring your own client, hand the
//! response body to [`http::bots::InfoResponse::from_json`] and match on the
//! result.
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate chrono;
extern crate serde_json;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate log;

pub mod http;

mod id;
pub use crate::id::*;
