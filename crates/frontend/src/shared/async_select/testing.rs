//! In-memory collaborators for session tests.

use super::debounce::Sleeper;
use super::error::SelectError;
use super::port::SearchPort;
use super::types::{PageRequest, PageResult, SearchQuery, SelectOption};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct TestRow {
    pub id: String,
    pub name: String,
}

impl TestRow {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id.clone(), self.name.clone())
    }
}

pub fn rows(prefix: &str, range: Range<usize>) -> Vec<TestRow> {
    range
        .map(|i| TestRow {
            id: format!("{}-{}", prefix, i),
            name: format!("{}-{}", prefix, i),
        })
        .collect()
}

type PageReply = Result<PageResult<TestRow>, SelectError>;

enum Scripted {
    Ready(PageReply),
    Gated(oneshot::Receiver<PageReply>),
}

/// Отвечает на запросы по порядку из очереди заготовленных ответов.
///
/// Ответ с гейтом держит запрос в полёте, пока тест не отправит результат;
/// так воспроизводятся перекрытия запросов.
#[derive(Default)]
pub struct ScriptedPort {
    replies: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<(SearchQuery, PageRequest)>>,
}

impl ScriptedPort {
    pub fn push_ok(&self, items: Vec<TestRow>, page_index: u32, total_pages: u32) {
        let page = PageResult::new(items, page_index, total_pages);
        self.replies.borrow_mut().push_back(Scripted::Ready(page));
    }

    pub fn push_err(&self, err: SelectError) {
        self.replies.borrow_mut().push_back(Scripted::Ready(Err(err)));
    }

    pub fn push_gated(&self) -> oneshot::Sender<PageReply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<(SearchQuery, PageRequest)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SearchPort for ScriptedPort {
    type Item = TestRow;

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<PageResult<TestRow>, SelectError> {
        self.calls.borrow_mut().push((query.clone(), page));
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(SelectError::Transport("gate dropped".into()))),
            None => Err(SelectError::Transport("no scripted reply".into())),
        }
    }
}

/// Sleeper, отпускаемый вручную; без гейта возвращается сразу
#[derive(Default)]
pub struct GateSleeper {
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    sleeps: Cell<usize>,
}

impl GateSleeper {
    pub fn push_gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

#[async_trait(?Send)]
impl Sleeper for GateSleeper {
    async fn sleep(&self, _delay: Duration) {
        self.sleeps.set(self.sleeps.get() + 1);
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}
