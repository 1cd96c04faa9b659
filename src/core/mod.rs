//! Business logic: occupancy policy, sign-out/sign-in transitions, and
//! roster administration.
//!
//! State-changing operations return a [`Transition`] so that a refused
//! request (room full, duplicate name, ...) is an explicit outcome rather
//! than an error. The kiosk treats every rejection as a plain redirect.

pub mod occupancy;
pub mod roster;
pub mod transitions;

/// Outcome of an operation that may be refused without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state change was applied.
    Applied,
    /// Nothing changed; the request was refused for the given reason.
    Rejected(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The configured number of students is already out.
    RoomFull,
    /// Sign-out of a student who is already out.
    AlreadyOut,
    /// Sign-in of a student who is not out.
    NotOut,
    /// Empty (or all-whitespace) student name.
    EmptyName,
    /// A student with this exact name already exists.
    DuplicateName,
    /// Capacity must be a positive integer.
    InvalidCapacity,
}
