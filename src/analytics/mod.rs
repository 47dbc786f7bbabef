// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Stateless aggregation pipeline over an in-memory transaction list.
//!
//! Every function here is pure: reports re-filter and re-aggregate the full
//! list on each call, and time-anchored operations take `today` as an
//! explicit parameter instead of reading the clock.

pub mod aggregate;
pub mod bucket;
pub mod compare;
pub mod insight;
pub mod period;
pub mod report;
pub mod trend;
