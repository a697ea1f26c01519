//! Response classifier: routes free text to a category and picks a reply.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::category::Category;
use super::picker::{RandomPicker, ReplyPicker};
use super::rules::ResponseTable;

/// Outcome of one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Category whose rule matched, or fallback
    pub category: Category,
    /// Reply drawn from that category's response set
    pub reply: String,
}

/// Stateless classifier over a shared, immutable [`ResponseTable`]
#[derive(Debug, Clone)]
pub struct ResponseClassifier {
    table: Arc<ResponseTable>,
}

impl Default for ResponseClassifier {
    fn default() -> Self {
        Self::new(Arc::new(ResponseTable::builtin()))
    }
}

impl ResponseClassifier {
    pub fn new(table: Arc<ResponseTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Category for `input` without choosing a reply.
    pub fn categorize(&self, input: &str) -> Category {
        self.table.resolve(&input.to_lowercase())
    }

    /// Classify with the thread-local random generator.
    pub fn classify(&self, input: &str) -> Classification {
        self.classify_with(input, &mut RandomPicker::thread())
    }

    /// Classify, letting `picker` choose among the category's replies.
    pub fn classify_with<P>(&self, input: &str, picker: &mut P) -> Classification
    where
        P: ReplyPicker + ?Sized,
    {
        let category = self.categorize(input);
        let replies = self.table.responses(category);
        // Out-of-range picks wrap
        let reply = replies[picker.pick(replies.len()) % replies.len()].clone();

        debug!(category = %category, candidates = replies.len(), "Classified chat message");

        Classification { category, reply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::picker::FixedPicker;

    #[test]
    fn test_empty_input_falls_back() {
        let classifier = ResponseClassifier::default();
        let result = classifier.classify("");
        assert_eq!(result.category, Category::Fallback);
        assert!(classifier
            .table()
            .responses(Category::Fallback)
            .contains(&result.reply));
    }

    #[test]
    fn test_fixed_picker_selects_reply() {
        let classifier = ResponseClassifier::default();
        let result = classifier.classify_with("hello", &mut FixedPicker::new(1));
        assert_eq!(result.category, Category::Greeting);
        assert_eq!(
            result.reply,
            classifier.table().responses(Category::Greeting)[1]
        );
    }

    #[test]
    fn test_dyn_picker() {
        let classifier = ResponseClassifier::default();
        let mut fixed = FixedPicker::new(0);
        let picker: &mut dyn ReplyPicker = &mut fixed;
        let result = classifier.classify_with("invoice", picker);
        assert_eq!(result.category, Category::Billing);
    }

    #[test]
    fn test_classifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponseClassifier>();
    }
}
