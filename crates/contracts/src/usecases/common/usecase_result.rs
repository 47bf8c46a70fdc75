use serde::{Deserialize, Serialize};

/// Результат выполнения UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Ошибка выполнения UseCase.
///
/// `message` показывается пользователю, `details` — только для
/// developer-лога (например, полный список ошибок валидации).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Нормализатор не нашёл пригодный объект `data`
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", message)
    }

    /// Отправка невозможна без действий пользователя (нет id сделки,
    /// пустой список продуктов)
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new("PRECONDITION", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Хостовая capability недоступна (updateRecord/close/resize)
    pub fn api_unavailable(message: impl Into<String>) -> Self {
        Self::new("API_UNAVAILABLE", message)
    }

    /// Отказ удалённого вызова; message берётся из ответа хоста
    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }

    /// PageLoad-событие так и не пришло
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<anyhow::Error> for UseCaseError {
    fn from(err: anyhow::Error) -> Self {
        UseCaseError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_details() {
        let err = UseCaseError::validation("Please check your product data and try again")
            .with_details("Product 1: Missing product ID");
        assert_eq!(
            err.to_string(),
            "[VALIDATION_ERROR] Please check your product data and try again: Product 1: Missing product ID"
        );
    }
}
