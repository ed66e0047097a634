//! Operation table
//!
//! The operation codes understood by XenStore (`xsd_sockmsg_type`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::XsError;

/// Operation codes
///
/// Codes 0-19 are sequential; `Restrict` is the only outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum Op {
    Debug = 0,
    Directory = 1,
    Read = 2,
    GetPerms = 3,
    Watch = 4,
    Unwatch = 5,
    TransactionStart = 6,
    TransactionEnd = 7,
    Introduce = 8,
    Release = 9,
    GetDomainPath = 10,
    Write = 11,
    Mkdir = 12,
    Rm = 13,
    SetPerms = 14,
    WatchEvent = 15,
    Error = 16,
    IsDomainIntroduced = 17,
    Resume = 18,
    SetTarget = 19,
    Restrict = 128,
}

impl Op {
    /// Every recognized operation, in code order
    pub const ALL: [Op; 21] = [
        Op::Debug,
        Op::Directory,
        Op::Read,
        Op::GetPerms,
        Op::Watch,
        Op::Unwatch,
        Op::TransactionStart,
        Op::TransactionEnd,
        Op::Introduce,
        Op::Release,
        Op::GetDomainPath,
        Op::Write,
        Op::Mkdir,
        Op::Rm,
        Op::SetPerms,
        Op::WatchEvent,
        Op::Error,
        Op::IsDomainIntroduced,
        Op::Resume,
        Op::SetTarget,
        Op::Restrict,
    ];

    /// Look up an operation by its wire code
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Op::Debug),
            1 => Some(Op::Directory),
            2 => Some(Op::Read),
            3 => Some(Op::GetPerms),
            4 => Some(Op::Watch),
            5 => Some(Op::Unwatch),
            6 => Some(Op::TransactionStart),
            7 => Some(Op::TransactionEnd),
            8 => Some(Op::Introduce),
            9 => Some(Op::Release),
            10 => Some(Op::GetDomainPath),
            11 => Some(Op::Write),
            12 => Some(Op::Mkdir),
            13 => Some(Op::Rm),
            14 => Some(Op::SetPerms),
            15 => Some(Op::WatchEvent),
            16 => Some(Op::Error),
            17 => Some(Op::IsDomainIntroduced),
            18 => Some(Op::Resume),
            19 => Some(Op::SetTarget),
            128 => Some(Op::Restrict),
            _ => None,
        }
    }

    /// Is `code` a recognized operation code?
    pub fn is_valid(code: u32) -> bool {
        Self::from_u32(code).is_some()
    }

    /// Wire code
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Canonical name, e.g. `TRANSACTION_START`
    pub const fn name(self) -> &'static str {
        match self {
            Op::Debug => "DEBUG",
            Op::Directory => "DIRECTORY",
            Op::Read => "READ",
            Op::GetPerms => "GET_PERMS",
            Op::Watch => "WATCH",
            Op::Unwatch => "UNWATCH",
            Op::TransactionStart => "TRANSACTION_START",
            Op::TransactionEnd => "TRANSACTION_END",
            Op::Introduce => "INTRODUCE",
            Op::Release => "RELEASE",
            Op::GetDomainPath => "GET_DOMAIN_PATH",
            Op::Write => "WRITE",
            Op::Mkdir => "MKDIR",
            Op::Rm => "RM",
            Op::SetPerms => "SET_PERMS",
            Op::WatchEvent => "WATCH_EVENT",
            Op::Error => "ERROR",
            Op::IsDomainIntroduced => "IS_DOMAIN_INTRODUCED",
            Op::Resume => "RESUME",
            Op::SetTarget => "SET_TARGET",
            Op::Restrict => "RESTRICT",
        }
    }

    /// Look up an operation by canonical name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

impl From<Op> for u32 {
    fn from(op: Op) -> u32 {
        op.code()
    }
}

impl TryFrom<u32> for Op {
    type Error = XsError;

    fn try_from(code: u32) -> Result<Self, XsError> {
        Op::from_u32(code).ok_or(XsError::InvalidOperation(code))
    }
}

impl FromStr for Op {
    type Err = XsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::from_name(s).ok_or_else(|| XsError::UnknownOperationName(s.to_string()))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
