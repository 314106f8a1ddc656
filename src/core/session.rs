use crate::domain::model::Cookie;
use crate::domain::ports::{BrowserEnv, ConfirmPolicy};

/// Name of the session identifier cookie.
pub const SESSION_COOKIE: &str = "sessionId";

/// Confirmation prompt shown before logout.
pub const LOGOUT_PROMPT: &str = "确认退出么？";

/// Production confirmation policy: Safari-identified agents skip the
/// prompt, everyone else must confirm.
#[derive(Debug, Clone, Default)]
pub struct UserAgentPolicy;

impl ConfirmPolicy for UserAgentPolicy {
    fn requires_confirmation(&self, user_agent: &str) -> bool {
        !user_agent.contains("Safari")
    }
}

pub struct SessionManager<E: BrowserEnv, P: ConfirmPolicy> {
    env: E,
    policy: P,
}

impl<E: BrowserEnv> SessionManager<E, UserAgentPolicy> {
    pub fn new(env: E) -> Self {
        Self::with_policy(env, UserAgentPolicy)
    }
}

impl<E: BrowserEnv, P: ConfirmPolicy> SessionManager<E, P> {
    pub fn with_policy(env: E, policy: P) -> Self {
        Self { env, policy }
    }

    /// Ends the session client-side: clears the session cookie and reloads
    /// the page. Returns false when the user declined the confirmation
    /// prompt, in which case nothing is touched. No server-side
    /// invalidation happens here.
    pub fn logout(&self) -> bool {
        let user_agent = self.env.user_agent();
        if self.policy.requires_confirmation(&user_agent) && !self.env.confirm(LOGOUT_PROMPT) {
            tracing::debug!("Logout cancelled by user");
            return false;
        }

        self.env.set_cookie(&Cookie::cleared(SESSION_COOKIE));
        self.env.reload();
        tracing::info!("Session cookie cleared, page reloaded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockBrowser {
        user_agent: String,
        confirm_answer: bool,
        cookies: Arc<Mutex<Vec<Cookie>>>,
        reloads: Arc<Mutex<usize>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockBrowser {
        fn new(user_agent: &str, confirm_answer: bool) -> Self {
            Self {
                user_agent: user_agent.to_string(),
                confirm_answer,
                ..Default::default()
            }
        }

        fn cookies(&self) -> Vec<Cookie> {
            self.cookies.lock().unwrap().clone()
        }

        fn reload_count(&self) -> usize {
            *self.reloads.lock().unwrap()
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl BrowserEnv for MockBrowser {
        fn user_agent(&self) -> String {
            self.user_agent.clone()
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.confirm_answer
        }

        fn set_cookie(&self, cookie: &Cookie) {
            self.cookies.lock().unwrap().push(cookie.clone());
        }

        fn reload(&self) {
            *self.reloads.lock().unwrap() += 1;
        }
    }

    const SAFARI_UA: &str =
        "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
    const OTHER_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

    #[test]
    fn test_logout_on_safari_skips_confirmation() {
        let browser = MockBrowser::new(SAFARI_UA, false);
        let manager = SessionManager::new(browser.clone());

        assert!(manager.logout());
        assert!(browser.prompts().is_empty());
        assert_eq!(browser.cookies().len(), 1);
        assert_eq!(browser.reload_count(), 1);
    }

    #[test]
    fn test_logout_declined_leaves_everything_untouched() {
        let browser = MockBrowser::new(OTHER_UA, false);
        let manager = SessionManager::new(browser.clone());

        assert!(!manager.logout());
        assert_eq!(browser.prompts(), vec![LOGOUT_PROMPT.to_string()]);
        assert!(browser.cookies().is_empty());
        assert_eq!(browser.reload_count(), 0);
    }

    #[test]
    fn test_logout_confirmed_clears_cookie_and_reloads() {
        let browser = MockBrowser::new(OTHER_UA, true);
        let manager = SessionManager::new(browser.clone());

        assert!(manager.logout());

        let cookies = browser.cookies();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, SESSION_COOKIE);
        assert_eq!(cookies[0].value, "''");
        assert_eq!(cookies[0].path, "/");
        assert!(cookies[0].is_expired_at(chrono::Utc::now()));
        assert_eq!(browser.reload_count(), 1);
    }

    #[test]
    fn test_custom_policy_overrides_user_agent_check() {
        struct AlwaysConfirm;
        impl ConfirmPolicy for AlwaysConfirm {
            fn requires_confirmation(&self, _user_agent: &str) -> bool {
                true
            }
        }

        let browser = MockBrowser::new(SAFARI_UA, false);
        let manager = SessionManager::with_policy(browser.clone(), AlwaysConfirm);

        assert!(!manager.logout());
        assert_eq!(browser.prompts().len(), 1);
        assert!(browser.cookies().is_empty());
    }
}
