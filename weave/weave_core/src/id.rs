//! Identifier conventions for the Weave aspect engine.
//!
//! Identifiers are plain strings. Pointcuts and advisors declared on an
//! aspect member are named after the aspect and the member, and join points
//! are named after the woven class and its member, both using `->` as the
//! separator.
//!
//! # Examples
//!
//! ```
//! use weave_core::id::{member_id, split_member_id};
//!
//! let id = member_id("Logging", "aroundSave");
//! assert_eq!(id, "Logging->aroundSave");
//! assert_eq!(split_member_id(&id), Some(("Logging", "aroundSave")));
//! ```

/// Separator between an owner and one of its members.
pub const MEMBER_SEPARATOR: &str = "->";

/// Tag attached to every registered aspect.
pub const ASPECT_TAG: &str = "aspect";

/// Tag attached to every registered pointcut.
pub const POINTCUT_TAG: &str = "pointcut";

/// Tag attached to every registered advisor.
pub const ADVISOR_TAG: &str = "advisor";

/// Build the ID of a member of `owner`.
///
/// Used both for advisor/pointcut IDs (`<aspect>-><member>`) and for join
/// point names (`<ClassName>-><memberName>`).
pub fn member_id(owner: &str, member: &str) -> String {
    format!("{}{}{}", owner, MEMBER_SEPARATOR, member)
}

/// Split a member ID into its owner and member parts.
///
/// Splits at the first separator. Returns `None` if the ID has no separator
/// or either side is empty.
pub fn split_member_id(id: &str) -> Option<(&str, &str)> {
    let (owner, member) = id.split_once(MEMBER_SEPARATOR)?;
    if owner.is_empty() || member.is_empty() {
        return None;
    }
    Some((owner, member))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_round_trip() {
        let id = member_id("App\\Aspect\\Logging", "beforeCall");
        assert_eq!(id, "App\\Aspect\\Logging->beforeCall");
        assert_eq!(
            split_member_id(&id),
            Some(("App\\Aspect\\Logging", "beforeCall"))
        );
    }

    #[test]
    fn test_split_rejects_malformed_ids() {
        assert_eq!(split_member_id("Logging"), None);
        assert_eq!(split_member_id("->foo"), None);
        assert_eq!(split_member_id("Logging->"), None);
    }
}
