use search_core::tokenizer::split_into_words;
use search_core::{find_top_documents, parse_query, DocId, SearchServer, StopWords};

fn server(stop_words: &str, docs: &[&str]) -> SearchServer {
    let mut server = SearchServer::with_stop_words(stop_words);
    for (id, text) in docs.iter().enumerate() {
        server.add_document(id as DocId, text).unwrap();
    }
    server
}

#[test]
fn stop_words_leave_equal_zero_relevance() {
    let server = server("a the", &["a cat sat", "the cat ran"]);
    let top = server.find_top_documents("cat");
    let ids: Vec<DocId> = top.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1]);
    assert!(top.iter().all(|d| d.relevance == 0.0));
}

#[test]
fn minus_word_removes_every_matching_document() {
    let server = server("", &["dog cat", "dog"]);
    assert!(server.find_top_documents("cat -dog").is_empty());
}

#[test]
fn unknown_word_finds_nothing() {
    let server = server("", &["fish"]);
    assert!(server.find_top_documents("bird").is_empty());
}

#[test]
fn keeps_the_five_most_relevant_of_six() {
    // every document has "hit" once among a different number of filler words
    let docs = [
        "hit",
        "hit f1",
        "hit f1 f2",
        "hit f1 f2 f3",
        "hit f1 f2 f3 f4",
        "hit f1 f2 f3 f4 f5",
        "other",
    ];
    let server = server("", &docs);
    let top = server.find_top_documents("hit");
    let ids: Vec<DocId> = top.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn results_are_ordered_and_bounded() {
    let server = server(
        "and with",
        &[
            "white cat and fancy collar",
            "fluffy cat fluffy tail",
            "groomed dog expressive eyes",
            "groomed starling eugene",
            "fluffy dog with collar",
        ],
    );
    for raw in ["fluffy groomed cat", "fluffy -collar", "dog cat collar eyes", "-"] {
        let query = parse_query(raw, server.stop_words());
        for limit in [0, 1, 2, 5, 10] {
            let top = find_top_documents(&query, server.index(), limit);
            assert!(top.len() <= limit);
            assert!(top.windows(2).all(|w| w[0].relevance >= w[1].relevance));
            assert!(top.iter().all(|d| d.relevance.is_finite()));
            for word in &query.excluded {
                if let Some(postings) = server.index().lookup(word) {
                    assert!(top.iter().all(|d| !postings.contains_key(&d.id)));
                }
            }
        }
    }
}

#[test]
fn matches_reference_relevance() {
    let server = server(
        "and with",
        &[
            "white cat and fancy collar",
            "fluffy cat fluffy tail",
            "groomed dog expressive eyes",
        ],
    );
    let top = server.find_top_documents("fluffy groomed cat");
    let ids: Vec<DocId> = top.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 0]);
    let ln3 = 3f64.ln();
    let ln15 = 1.5f64.ln();
    assert!((top[0].relevance - (ln3 * 0.5 + ln15 * 0.25)).abs() < 1e-12);
    assert!((top[1].relevance - ln3 * 0.25).abs() < 1e-12);
    assert!((top[2].relevance - ln15 * 0.25).abs() < 1e-12);
}

#[test]
fn document_count_tracks_every_accepted_document() {
    let mut server = SearchServer::new();
    for (expected, text) in ["cat", "", "dog dog"].iter().enumerate() {
        server.add_document(expected as DocId, text).unwrap();
        assert_eq!(server.document_count(), expected + 1);
    }
    assert!(server.add_document(1, "again").is_err());
    assert_eq!(server.document_count(), 3);
}

#[test]
fn empty_document_counts_towards_idf() {
    let server = server("", &["cat", ""]);
    let top = server.find_top_documents("cat");
    assert_eq!(top.len(), 1);
    assert!((top[0].relevance - 2f64.ln()).abs() < 1e-12);
}

#[test]
fn bare_minus_excludes_nothing() {
    let server = server("", &["cat", "dog cat"]);
    assert_eq!(server.find_top_documents("cat -").len(), 2);
}

#[test]
fn stop_word_set_is_union_of_calls() {
    let mut once = StopWords::new();
    once.extend_from_text("a b");
    let mut twice = StopWords::new();
    twice.extend_from_text("a b");
    twice.extend_from_text("a b");
    assert_eq!(once.len(), twice.len());
    assert!(split_into_words("a b").iter().all(|w| twice.contains(w)));
}
