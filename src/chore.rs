use serde::{Deserialize, Serialize};

use crate::wheel::{default_weight, Candidate};

/// Household member role. Legacy rows may still say "parent"; it reads
/// as an adult.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "parent")]
    Adult,
    Child,
}

impl Role {
    pub fn is_adult(self) -> bool {
        self == Role::Adult
    }
}

/// Which members a chore is offered to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Kids,
    Adults,
    Any,
}

impl Audience {
    pub fn allows(self, role: Role) -> bool {
        match self {
            Audience::Any => true,
            Audience::Adults => role == Role::Adult,
            Audience::Kids => role == Role::Child,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One chore in the household catalog, as served by the remote service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Chore {
    pub id: String,
    pub title: String,
    /// Estimated minutes to complete; the time budget shown with an
    /// assignment.
    pub minutes: u32,
    pub points: i32,
    pub audience: Audience,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub cost_points: i32,
    pub active: bool,
}

/// Row of the service's member_points view; the balance is computed
/// server-side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemberPoints {
    pub member_id: String,
    pub points_balance: i32,
}

// === API Types ===

/// Payload for the start_assignment procedure, sent once the wheel has
/// chosen a chore.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartAssignmentRequest {
    pub member_id: String,
    pub chore_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartAssignmentResponse {
    pub assignment_id: String,
    /// Expected-completion timestamp (unix seconds); the client only
    /// displays a countdown toward it, expiry is enforced server-side.
    pub ends_at: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubmitAssignmentRequest {
    pub assignment_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubmitAssignmentResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Requests a reward redemption; an adult approves it elsewhere.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RedeemRewardRequest {
    pub member_id: String,
    pub reward_id: String,
}

/// Active chores the given role may be assigned, in catalog order.
pub fn eligible_chores(chores: &[Chore], role: Role) -> Vec<Chore> {
    chores
        .iter()
        .filter(|c| c.active && c.audience.allows(role))
        .cloned()
        .collect()
}

/// Maps chores to wheel candidates, preserving order so slice positions
/// match catalog order.
pub fn wheel_candidates(chores: &[Chore]) -> Vec<Candidate> {
    chores
        .iter()
        .map(|c| Candidate::new(c.id.clone(), c.title.clone(), c.weight))
        .collect()
}

/// Formats remaining seconds for the assignment countdown display.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
