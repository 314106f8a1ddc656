use std::sync::{Arc, Mutex};
use urvip_client::{BrowserEnv, Cookie, SessionManager, SESSION_COOKIE};

#[derive(Clone, Default)]
struct RecordingBrowser {
    user_agent: String,
    confirm_answer: bool,
    cookie_writes: Arc<Mutex<Vec<String>>>,
    reloads: Arc<Mutex<usize>>,
}

impl BrowserEnv for RecordingBrowser {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.confirm_answer
    }

    fn set_cookie(&self, cookie: &Cookie) {
        self.cookie_writes.lock().unwrap().push(cookie.to_string());
    }

    fn reload(&self) {
        *self.reloads.lock().unwrap() += 1;
    }
}

#[test]
fn test_logout_writes_expired_session_cookie_string() {
    let browser = RecordingBrowser {
        user_agent: "Mozilla/5.0 AppleWebKit/605.1.15 Safari/605.1.15".to_string(),
        confirm_answer: false,
        ..Default::default()
    };
    let manager = SessionManager::new(browser.clone());

    assert!(manager.logout());

    let writes = browser.cookie_writes.lock().unwrap().clone();
    assert_eq!(
        writes,
        vec![format!(
            "{}='';path=/;expires=Thu, 01 Jan 1970 00:00:00 GMT",
            SESSION_COOKIE
        )]
    );
    assert_eq!(*browser.reloads.lock().unwrap(), 1);
}

#[test]
fn test_logout_declined_is_a_no_op() {
    let browser = RecordingBrowser {
        user_agent: "Mozilla/5.0 Gecko/20100101 Firefox/128.0".to_string(),
        confirm_answer: false,
        ..Default::default()
    };
    let manager = SessionManager::new(browser.clone());

    assert!(!manager.logout());
    assert!(browser.cookie_writes.lock().unwrap().is_empty());
    assert_eq!(*browser.reloads.lock().unwrap(), 0);
}
