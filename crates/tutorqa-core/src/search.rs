use super::model::Thread;

// Queries are matched verbatim: no trimming, so a whitespace-only query
// filters literally instead of matching everything.
pub fn filter_recent<'a>(threads: &'a [Thread], query: &str) -> Vec<&'a Thread> {
    if query.is_empty() {
        return threads.iter().collect();
    }
    let needle = query.to_lowercase();
    threads
        .iter()
        .filter(|thread| matches_thread(thread, &needle))
        .collect()
}

fn matches_thread(thread: &Thread, needle: &str) -> bool {
    thread.title.to_lowercase().contains(needle)
        || thread
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
