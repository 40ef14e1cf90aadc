use super::accumulator::{DuplicatePolicy, OptionAccumulator};
use super::cursor::PageCursor;
use super::debounce::{Debouncer, Sleeper};
use super::error::SelectError;
use super::port::SearchPort;
use super::types::{PageRequest, PageResult, SearchQuery, SelectOption};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Снимок состояния сессии только для чтения (отдаётся в UI)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub query: SearchQuery,
    pub options: Vec<SelectOption>,
    pub current_page: u32,
    pub total_pages: Option<u32>,
    pub has_more: bool,
    pub is_loading: bool,
    /// Растёт при каждом изменении области; выбранное значение прежней
    /// области в поле больше не действительно
    pub scope_revision: u64,
}

type Projection<T> = Rc<dyn Fn(&T) -> SelectOption>;
type Listener = Rc<dyn Fn(&SessionSnapshot)>;

struct SessionState {
    query: SearchQuery,
    options: OptionAccumulator,
    cursor: PageCursor,
    phase: Phase,
    scope_revision: u64,
}

impl SessionState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            options: self.options.snapshot(),
            current_page: self.cursor.current_page(),
            total_pages: self.cursor.total_pages(),
            has_more: self.cursor.has_more(),
            is_loading: self.phase == Phase::Loading,
            scope_revision: self.scope_revision,
        }
    }
}

struct SessionInner<P: SearchPort> {
    port: P,
    project: Projection<P::Item>,
    state: RefCell<SessionState>,
    /// Увеличивается при каждом сбросе и каждой принятой догрузке;
    /// ответ с другим захваченным значением устарел.
    generation: Cell<u64>,
    started: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

/// Сессия поиска одного поля выбора.
///
/// Владеет запросом, загруженными вариантами и курсором страниц и решает,
/// когда идти на сервер. `clone()` даёт ещё один хэндл той же сессии;
/// у независимых полей должны быть независимые сессии.
///
/// Правила:
/// - смена текста/области или refresh сбрасывает список и грузит страницу 1,
///   результат заменяет варианты;
/// - прокрутка до конца догружает страницу `current + 1`, не больше одной
///   одновременно и только пока есть ещё страницы;
/// - пока ни одна страница не загружена, прокрутка повторяет страницу 1;
/// - ответ на запрос, выданный до последнего сброса или догрузки,
///   отбрасывается: побеждает последний запрос;
/// - ошибка загрузки только снимает флаг загрузки.
pub struct SearchSession<P: SearchPort> {
    inner: Rc<SessionInner<P>>,
}

impl<P: SearchPort> Clone for SearchSession<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: SearchPort + 'static> SearchSession<P> {
    pub fn new(
        port: P,
        page_size: u32,
        project: impl Fn(&P::Item) -> SelectOption + 'static,
    ) -> Self {
        Self::with_policy(port, page_size, DuplicatePolicy::default(), project)
    }

    pub fn with_policy(
        port: P,
        page_size: u32,
        duplicates: DuplicatePolicy,
        project: impl Fn(&P::Item) -> SelectOption + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                port,
                project: Rc::new(project),
                state: RefCell::new(SessionState {
                    query: SearchQuery::default(),
                    options: OptionAccumulator::new(duplicates),
                    cursor: PageCursor::new(page_size),
                    phase: Phase::Idle,
                    scope_revision: 0,
                }),
                generation: Cell::new(0),
                started: Cell::new(false),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Начальная область поиска, без запроса к серверу
    pub fn with_scope(self, scope: BTreeMap<String, String>) -> Self {
        self.inner.state.borrow_mut().query.scope = scope;
        self
    }

    pub fn port(&self) -> &P {
        &self.inner.port
    }

    /// Единственный подписчик, получающий снимок после каждого изменения
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().snapshot()
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.inner.state.borrow().options.snapshot()
    }

    pub fn query(&self) -> SearchQuery {
        self.inner.state.borrow().query.clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    pub fn has_more(&self) -> bool {
        self.inner.state.borrow().cursor.has_more()
    }

    pub fn scope_revision(&self) -> u64 {
        self.inner.state.borrow().scope_revision
    }

    pub fn current_page(&self) -> u32 {
        self.inner.state.borrow().cursor.current_page()
    }

    /// Был ли хоть один сброс с загрузкой (поле открывали или искали)
    pub fn has_started(&self) -> bool {
        self.inner.started.get()
    }

    /// Новый текст фильтра: сброс и загрузка страницы 1 (пустой текст = без фильтра)
    pub async fn on_query_changed(
        &self,
        text: impl Into<String>,
    ) -> Result<Vec<SelectOption>, SelectError> {
        let query = {
            let mut state = self.inner.state.borrow_mut();
            state.query.text = text.into();
            state.query.clone()
        };
        self.reset_fetch(query).await
    }

    /// То же, что [`Self::on_query_changed`], но через окно debounce.
    ///
    /// `Ok(None)`, если до закрытия окна пришла более новая правка;
    /// запрос в этом случае не выполняется.
    pub async fn on_query_changed_debounced<S: Sleeper>(
        &self,
        text: impl Into<String>,
        debouncer: &Debouncer<S>,
    ) -> Result<Option<Vec<SelectOption>>, SelectError> {
        let text = text.into();
        if !debouncer.settle().await {
            log::trace!("[AsyncSelect] edit {:?} superseded during debounce", text);
            return Ok(None);
        }
        self.on_query_changed(text).await.map(Some)
    }

    /// Заменяет параметры области и перезагружает с текущим текстом
    pub async fn on_scope_changed(
        &self,
        scope: BTreeMap<String, String>,
    ) -> Result<Vec<SelectOption>, SelectError> {
        let query = {
            let mut state = self.inner.state.borrow_mut();
            if state.query.scope != scope {
                state.query.scope = scope;
                state.scope_revision += 1;
            }
            state.query.clone()
        };
        self.reset_fetch(query).await
    }

    /// Меняет один параметр области без запроса. `true`, если запрос
    /// изменился; вызывать ли [`Self::refresh`], решает вызывающий.
    ///
    /// Изменение очищает список и бросает запрос в полёте: он относится
    /// к прежней области.
    pub fn set_scope_value(&self, key: &str, value: Option<String>) -> bool {
        {
            let mut state = self.inner.state.borrow_mut();
            if !state.query.set_scope_value(key, value) {
                return false;
            }
            state.options.clear();
            state.cursor.reset();
            state.phase = Phase::Idle;
            state.scope_revision += 1;
        }
        self.bump_generation();
        self.notify();
        true
    }

    /// Явная перезагрузка с текущим запросом
    pub async fn refresh(&self) -> Result<Vec<SelectOption>, SelectError> {
        let query = self.query();
        self.reset_fetch(query).await
    }

    /// Первое открытие: грузит первую страницу без фильтра,
    /// если варианты ещё не загружены
    pub async fn initialize(&self) -> Result<Vec<SelectOption>, SelectError> {
        if !self.inner.state.borrow().options.is_empty() {
            return Ok(self.options());
        }
        self.on_query_changed(String::new()).await
    }

    /// Открытие списка.
    ///
    /// Первое открытие грузит первую страницу без фильтра. Дальше список
    /// перезагружается только если после последнего сброса ни одна страница
    /// не загрузилась (ошибка или смена области), и с текущим текстом:
    /// открытие не должно подменять введённый фильтр пустым.
    pub async fn on_open(&self) -> Result<Vec<SelectOption>, SelectError> {
        if self.is_loading() {
            return Ok(self.options());
        }
        if !self.has_started() {
            return self.initialize().await;
        }
        let (loaded, query) = {
            let state = self.inner.state.borrow();
            (state.cursor.total_pages().is_some(), state.query.clone())
        };
        if loaded {
            return Ok(self.options());
        }
        log::debug!("[AsyncSelect] reopened with nothing loaded, reloading {:?}", query.text);
        self.reset_fetch(query).await
    }

    /// «Загрузить ещё»: догружает следующую страницу, если загрузка не идёт
    /// и последняя страница ещё не получена
    pub async fn on_scroll_near_end(&self) -> Result<Vec<SelectOption>, SelectError> {
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            if state.phase == Phase::Loading || !state.cursor.has_more() {
                log::trace!(
                    "[AsyncSelect] load more skipped (loading: {}, has_more: {})",
                    state.phase == Phase::Loading,
                    state.cursor.has_more()
                );
                return Ok(state.options.snapshot());
            }
            if state.cursor.total_pages().is_none() {
                // Ни одна страница ещё не загружена (или первая упала):
                // догружать нечего, повторяем страницу 1.
                None
            } else {
                state.phase = Phase::Loading;
                Some((
                    state.query.clone(),
                    state.cursor.next_page(),
                    self.bump_generation(),
                ))
            }
        };
        let Some((query, page, generation)) = pending else {
            log::debug!("[AsyncSelect] nothing loaded yet, retrying page 1");
            let query = self.query();
            return self.reset_fetch(query).await;
        };
        self.notify();

        log::debug!(
            "[AsyncSelect] loading page {} for {:?}",
            page.index,
            query.text
        );
        let result = self.inner.port.fetch_page(&query, page).await;
        if !self.is_current(generation) {
            log::debug!("[AsyncSelect] dropped stale page {}", page.index);
            return Ok(self.options());
        }

        let outcome = {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Idle;
            match result {
                Ok(page_result) => {
                    let page_result = self.project(page_result);
                    let total_pages = page_result.total_pages;
                    let added = state.options.append(page_result.items);
                    state.cursor.settle(page, total_pages);
                    log::debug!(
                        "[AsyncSelect] page {}/{} appended {} options",
                        page.index,
                        total_pages,
                        added
                    );
                    Ok(state.options.snapshot())
                }
                Err(err) => {
                    log::warn!("[AsyncSelect] page {} failed: {}", page.index, err);
                    Err(err)
                }
            }
        };
        self.notify();
        outcome
    }

    async fn reset_fetch(&self, query: SearchQuery) -> Result<Vec<SelectOption>, SelectError> {
        let generation = self.bump_generation();
        self.inner.started.set(true);
        let page: PageRequest = {
            let mut state = self.inner.state.borrow_mut();
            state.options.clear();
            state.cursor.reset();
            state.phase = Phase::Loading;
            state.cursor.first_page()
        };
        self.notify();

        log::debug!(
            "[AsyncSelect] reset search {:?} (scope: {:?})",
            query.text,
            query.scope
        );
        let result = self.inner.port.fetch_page(&query, page).await;
        if !self.is_current(generation) {
            log::debug!("[AsyncSelect] dropped stale result for {:?}", query.text);
            return Ok(self.options());
        }

        let outcome = {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Idle;
            match result {
                Ok(page_result) => {
                    let page_result = self.project(page_result);
                    let total_pages = page_result.total_pages;
                    state.options.replace(page_result.items);
                    state.cursor.settle(page, total_pages);
                    Ok(state.options.snapshot())
                }
                Err(err) => {
                    log::warn!("[AsyncSelect] search {:?} failed: {}", query.text, err);
                    Err(err)
                }
            }
        };
        self.notify();
        outcome
    }

    fn project(&self, page: PageResult<P::Item>) -> PageResult<SelectOption> {
        let project = &self.inner.project;
        page.map(|item| project(item))
    }

    fn bump_generation(&self) -> u64 {
        let next = self.inner.generation.get() + 1;
        self.inner.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.generation.get() == generation
    }

    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.snapshot();
            listener(&snapshot);
        }
    }
}
