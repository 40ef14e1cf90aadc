use super::types::SelectOption;
use std::collections::HashSet;

/// Что делать с вариантом, значение которого уже загружено.
///
/// Offset-пагинация по живой таблице может повторить строку на двух
/// страницах после вставки; по умолчанию повторы остаются как пришли.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Keep,
    DropRepeatedValues,
}

/// Упорядоченный список загруженных вариантов (порядок прихода = порядок страниц)
#[derive(Debug, Clone, Default)]
pub struct OptionAccumulator {
    options: Vec<SelectOption>,
    seen: HashSet<String>,
    policy: DuplicatePolicy,
}

impl OptionAccumulator {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            options: Vec::new(),
            seen: HashSet::new(),
            policy,
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.seen.clear();
    }

    /// Заменяет весь список, даже пустой страницей
    pub fn replace(&mut self, items: Vec<SelectOption>) {
        self.clear();
        self.append(items);
    }

    /// Добавляет в конец по порядку. Возвращает число реально добавленных
    pub fn append(&mut self, items: Vec<SelectOption>) -> usize {
        let before = self.options.len();
        match self.policy {
            DuplicatePolicy::Keep => self.options.extend(items),
            DuplicatePolicy::DropRepeatedValues => {
                for item in items {
                    if self.seen.insert(item.value.clone()) {
                        self.options.push(item);
                    }
                }
            }
        }
        self.options.len() - before
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn snapshot(&self) -> Vec<SelectOption> {
        self.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<SelectOption> {
        values.iter().map(|v| SelectOption::new(*v, v.to_uppercase())).collect()
    }

    fn values(acc: &OptionAccumulator) -> Vec<&str> {
        acc.as_slice().iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_replace_then_append_keeps_arrival_order() {
        let mut acc = OptionAccumulator::default();
        acc.replace(opts(&["a", "b"]));
        assert_eq!(acc.append(opts(&["c", "d"])), 2);
        assert_eq!(values(&acc), vec!["a", "b", "c", "d"]);

        acc.replace(opts(&["x"]));
        assert_eq!(values(&acc), vec!["x"]);

        acc.replace(Vec::new());
        assert!(acc.is_empty());
    }

    #[test]
    fn test_keep_policy_tolerates_duplicates() {
        let mut acc = OptionAccumulator::new(DuplicatePolicy::Keep);
        acc.replace(opts(&["a", "b"]));
        acc.append(opts(&["b", "c"]));
        assert_eq!(values(&acc), vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_drop_policy_skips_repeated_values() {
        let mut acc = OptionAccumulator::new(DuplicatePolicy::DropRepeatedValues);
        acc.replace(opts(&["a", "b"]));
        assert_eq!(acc.append(opts(&["b", "c", "c"])), 1);
        assert_eq!(values(&acc), vec!["a", "b", "c"]);

        // replace забывает ранее виденные значения
        acc.replace(opts(&["b"]));
        assert_eq!(values(&acc), vec!["b"]);
    }
}
