#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Notified { label: String, message: String },
    Failed { label: String, message: String },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    notice: Option<Notice>,
}

impl StatusBar {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, label: &str, message: &str, is_error: bool) {
        let message = message.replace('\n', " ");
        self.notice = Some(Notice {
            text: format!("[{label}] {message}"),
            is_error,
        });
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Notified { label, message } => self.set_notice(&label, &message, false),
            Message::Failed { label, message } => {
                self.set_notice(&format!("ERR: {label}"), &message, true)
            }
            Message::Cleared => self.notice = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_empty() {
        let status_bar = StatusBar::default();
        assert_eq!(status_bar.notice(), None);
    }

    #[test]
    fn test_notified() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Notified {
            label: "Theme".to_string(),
            message: "Switched to light".to_string(),
        });
        assert_eq!(
            status_bar.notice(),
            Some(&Notice {
                text: "[Theme] Switched to light".to_string(),
                is_error: false,
            })
        );
    }

    #[test]
    fn test_failed_is_marked_as_error() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Failed {
            label: "Theme".to_string(),
            message: "Permission denied\n(os error 13)".to_string(),
        });
        assert_eq!(
            status_bar.notice(),
            Some(&Notice {
                text: "[ERR: Theme] Permission denied (os error 13)".to_string(),
                is_error: true,
            })
        );
    }

    #[test]
    fn test_newer_notice_wins() {
        let mut status_bar = StatusBar::default();
        for label in ["First", "Second"] {
            status_bar.update(Message::Notified {
                label: label.to_string(),
                message: "hello".to_string(),
            });
        }
        assert_eq!(
            status_bar.notice().map(|n| n.text.as_str()),
            Some("[Second] hello")
        );
    }

    #[test]
    fn test_cleared() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Notified {
            label: "Info".to_string(),
            message: "hi".to_string(),
        });
        status_bar.update(Message::Cleared);
        assert_eq!(status_bar, StatusBar::default());
    }
}
