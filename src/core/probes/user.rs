use std::path::PathBuf;

use crate::core::probes::types::UserInfo;
use crate::error::{ReportError, Result};

/// Resolve the invoking session's login name and home directory.
///
/// Headless/service contexts where no login name is resolvable fail with
/// `NoLoginSession`; that is a real platform condition and is not masked.
pub fn collect() -> Result<UserInfo> {
    resolve(
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok(),
        dirs::home_dir(),
    )
}

/// Pure resolution step, separated from the environment lookups so the
/// headless case is testable without mutating process state.
fn resolve(login: Option<String>, home: Option<PathBuf>) -> Result<UserInfo> {
    let username = login.filter(|name| !name.is_empty()).ok_or_else(|| {
        ReportError::no_login_session("no login name resolvable for this session")
    })?;

    let home_dir = home
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(UserInfo { username, home_dir })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_login_and_home() {
        let info = resolve(Some("alice".to_string()), Some(PathBuf::from("/home/alice")))
            .expect("a named session resolves");
        assert_eq!(info.username, "alice");
        assert_eq!(info.home_dir, "/home/alice");
    }

    #[test]
    fn test_resolve_without_login_is_a_headless_session() {
        let err = resolve(None, Some(PathBuf::from("/root"))).unwrap_err();
        assert!(matches!(err, ReportError::NoLoginSession(_)));
    }

    #[test]
    fn test_resolve_rejects_empty_login_name() {
        let err = resolve(Some(String::new()), None).unwrap_err();
        assert!(matches!(err, ReportError::NoLoginSession(_)));
    }

    #[test]
    fn test_resolve_falls_back_when_home_is_unknown() {
        let info = resolve(Some("svc".to_string()), None).unwrap();
        assert_eq!(info.home_dir, "unknown");
    }

    #[test]
    fn test_collect_matches_session_environment() {
        match collect() {
            Ok(info) => {
                assert!(!info.username.is_empty());
                assert!(!info.home_dir.is_empty());
            }
            Err(e) => {
                // Headless CI runners may legitimately have no session.
                assert!(matches!(e, ReportError::NoLoginSession(_)));
            }
        }
    }
}
