//! Host capability and the deletion driver.
//!
//! The hosting text surface is reduced to two operations: report the text
//! before the cursor, and delete one character backward. Everything else
//! about the host (selection, layout, UI lifecycle) stays on the platform
//! side. The driver resolves a span and replays it as single deletions.

use crate::resolver::{DeletionGranularity, DeletionSpan, Resolver};

/// Text surface a keyboard edits.
///
/// Implementations must tolerate `delete_backward` being called when there is
/// nothing left to delete.
pub trait TextDocument {
    /// Text immediately preceding the cursor, or `None` if the host has none.
    fn text_before_cursor(&self) -> Option<String>;

    /// Remove exactly one character immediately before the cursor.
    fn delete_backward(&mut self);
}

impl<T: TextDocument + ?Sized> TextDocument for &mut T {
    fn text_before_cursor(&self) -> Option<String> {
        (**self).text_before_cursor()
    }

    fn delete_backward(&mut self) {
        (**self).delete_backward()
    }
}

/// Issue `count` single-character backward deletions.
pub fn delete_backward_count<D: TextDocument + ?Sized>(document: &mut D, count: usize) {
    for _ in 0..count {
        document.delete_backward();
    }
}

/// Issue one backward deletion per character of `span`.
///
/// Returns the number of deletions issued.
pub fn delete_span<D: TextDocument + ?Sized>(document: &mut D, span: &DeletionSpan<'_>) -> usize {
    let count = span.char_count();
    delete_backward_count(document, count);
    count
}

/// Resolve and apply one delete request of `granularity`.
///
/// Returns the number of characters deleted; zero when the host reports no
/// context.
pub fn delete_by_granularity<D: TextDocument + ?Sized>(
    document: &mut D,
    resolver: &Resolver,
    granularity: DeletionGranularity,
) -> usize {
    let Some(context) = document.text_before_cursor() else {
        tracing::debug!(%granularity, "no context before cursor, nothing to delete");
        return 0;
    };

    let span = resolver.resolve(Some(context.as_str()), granularity);
    let count = delete_span(document, &span);
    tracing::debug!(%granularity, deleted = count, "applied backward deletion");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host that records calls and never reports context.
    #[derive(Default)]
    struct DetachedHost {
        deletes: usize,
    }

    impl TextDocument for DetachedHost {
        fn text_before_cursor(&self) -> Option<String> {
            None
        }

        fn delete_backward(&mut self) {
            self.deletes += 1;
        }
    }

    /// Host backed by a plain string with the cursor at the end.
    struct StringHost(String);

    impl TextDocument for StringHost {
        fn text_before_cursor(&self) -> Option<String> {
            Some(self.0.clone())
        }

        fn delete_backward(&mut self) {
            self.0.pop();
        }
    }

    #[test]
    fn test_no_context_issues_no_deletes() {
        let mut host = DetachedHost::default();
        for g in DeletionGranularity::ALL {
            assert_eq!(delete_by_granularity(&mut host, &Resolver::default(), g), 0);
        }
        assert_eq!(host.deletes, 0);
    }

    #[test]
    fn test_delete_backward_count() {
        let mut host = DetachedHost::default();
        delete_backward_count(&mut host, 0);
        assert_eq!(host.deletes, 0);
        delete_backward_count(&mut host, 4);
        assert_eq!(host.deletes, 4);
    }

    #[test]
    fn test_delete_word_from_string() {
        let mut host = StringHost("hello world".to_string());
        let n = delete_by_granularity(&mut host, &Resolver::default(), DeletionGranularity::Word);
        assert_eq!(n, 5);
        assert_eq!(host.0, "hello ");
    }

    #[test]
    fn test_delete_counts_chars_not_bytes() {
        let mut host = StringHost("こんにちは 世界".to_string());
        let n = delete_by_granularity(&mut host, &Resolver::default(), DeletionGranularity::Word);
        assert_eq!(n, 2);
        assert_eq!(host.0, "こんにちは ");
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut host = StringHost("ab".to_string());
        let mut by_ref = &mut host;
        delete_backward_count(&mut by_ref, 1);
        assert_eq!(host.0, "a");
    }
}
