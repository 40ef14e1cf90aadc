use thiserror::Error;

/// Ошибка загрузки одной страницы.
///
/// После любой из них сессия остаётся рабочей: повтор возможен при следующей
/// правке, прокрутке или явном refresh. Ответы, вытесненные более новым
/// запросом, отбрасываются молча и сюда не попадают.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("Server error: {0}")]
    Api(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SelectError {
    /// Короткий текст для уведомления пользователя
    pub fn user_message(&self) -> String {
        match self {
            SelectError::Transport(_) => "Не удалось загрузить список: нет связи с сервером".to_string(),
            SelectError::Status { status } => format!("Не удалось загрузить список (HTTP {})", status),
            SelectError::Api(message) => format!("Не удалось загрузить список: {}", message),
            SelectError::MalformedResponse(_) => {
                "Не удалось загрузить список: некорректный ответ сервера".to_string()
            }
        }
    }
}
