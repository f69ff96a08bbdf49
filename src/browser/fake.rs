//! Scripted browser session for tests.

use crate::browser::BrowserSession;
use crate::error::BrowserError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

/// Every command the fake received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Goto(String),
    Source,
    Scroll,
    Height,
    Click(String),
    WaitFor(String),
    Close,
}

#[derive(Debug, Default)]
pub(crate) struct FakeSession {
    pages: HashMap<String, String>,
    timeouts: HashSet<String>,
    unreachable: HashSet<String>,
    heights: VecDeque<u64>,
    height_reads: usize,
    failing_height_at: Option<usize>,
    click_errors: bool,
    endless: bool,
    show_more: bool,
    height: u64,
    current: Option<String>,
    log: Rc<RefCell<Vec<Command>>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` when `url` is loaded
    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    /// Element waits on `url` time out
    pub fn timing_out(mut self, url: &str) -> Self {
        self.timeouts.insert(url.to_string());
        self
    }

    /// Navigating to `url` fails
    pub fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    /// Height reading number `read` (counting from zero) fails
    pub fn failing_height_at(mut self, read: usize) -> Self {
        self.failing_height_at = Some(read);
        self
    }

    /// Every show-more lookup fails with a command error
    pub fn click_errors(mut self) -> Self {
        self.click_errors = true;
        self
    }

    /// Successive height readings; the last one repeats once they run out
    pub fn with_heights(mut self, heights: &[u64]) -> Self {
        self.heights = heights.iter().copied().collect();
        self
    }

    /// Every height reading after the scripted ones is taller than the last
    pub fn endless(mut self) -> Self {
        self.endless = true;
        self
    }

    /// The show-more button is clickable
    pub fn with_show_more(mut self) -> Self {
        self.show_more = true;
        self
    }

    /// Handle on the command log that outlives the session
    pub fn log(&self) -> Rc<RefCell<Vec<Command>>> {
        Rc::clone(&self.log)
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }

    pub fn count(&self, wanted: &Command) -> usize {
        self.log.borrow().iter().filter(|c| *c == wanted).count()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Command::Goto(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, command: Command) {
        self.log.borrow_mut().push(command);
    }

    fn current_page(&self) -> Option<&String> {
        self.current.as_ref().and_then(|url| self.pages.get(url))
    }
}

impl BrowserSession for FakeSession {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.record(Command::Goto(url.to_string()));
        if self.unreachable.contains(url) {
            return Err(BrowserError::Connect {
                url: url.to_string(),
                reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            });
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn source(&mut self) -> Result<String, BrowserError> {
        self.record(Command::Source);
        self.current_page()
            .cloned()
            .ok_or_else(|| BrowserError::Script("no page loaded".to_string()))
    }

    async fn scroll_to_bottom(&mut self) -> Result<(), BrowserError> {
        self.record(Command::Scroll);
        Ok(())
    }

    async fn document_height(&mut self) -> Result<u64, BrowserError> {
        self.record(Command::Height);
        let read = self.height_reads;
        self.height_reads += 1;
        if self.failing_height_at == Some(read) {
            return Err(BrowserError::Script("document height unavailable".to_string()));
        }

        if let Some(height) = self.heights.pop_front() {
            self.height = height;
        } else if self.endless {
            self.height += 500;
        }
        Ok(self.height)
    }

    async fn click_when_clickable(
        &mut self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<bool, BrowserError> {
        self.record(Command::Click(selector.to_string()));
        if self.click_errors {
            return Err(BrowserError::Script("stale element reference".to_string()));
        }
        Ok(self.show_more)
    }

    async fn wait_for_element(
        &mut self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<(), BrowserError> {
        self.record(Command::WaitFor(selector.to_string()));

        let timed_out = match &self.current {
            Some(url) => self.timeouts.contains(url),
            None => true,
        };
        let class = selector.trim_start_matches('.');
        let present = self.current_page().is_some_and(|html| html.contains(class));

        if timed_out || !present {
            return Err(BrowserError::Timeout(selector.to_string()));
        }
        Ok(())
    }

    async fn close(self) -> Result<(), BrowserError> {
        self.record(Command::Close);
        Ok(())
    }
}
