//! End-to-end flow through prompt rendering, a fake provider, and
//! extraction, without touching the network or storage.

use texttopot_core::llm::{FakeProvider, LlmProvider};
use texttopot_core::{extract_recipes, suggest_request, IngredientQuery, MAX_RECIPES};

#[tokio::test]
async fn structured_reply_round_trips_into_records() {
    let query = IngredientQuery::parse(Some("rice, tomatoes, onions")).unwrap();
    let provider = FakeProvider::with_suggestions();

    let request = suggest_request(&query);
    let raw = provider.complete(&request).await.unwrap();
    let records = extract_recipes(&raw, &query);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Jollof Rice");
    assert!(records[0].ingredients.contains("rice"));
    assert!(!records[0].instructions.is_empty());
}

#[tokio::test]
async fn prose_reply_falls_back_to_paragraph_records() {
    let query = IngredientQuery::parse(Some("melon seeds")).unwrap();
    let provider = FakeProvider::with_response(
        "melon seeds",
        "Sure! Here are some ideas:\n\nEgusi Soup\nBlend the seeds and simmer.\n\nEgusi Stew\nFry then stew.",
    );

    let request = suggest_request(&query);
    let raw = provider.complete(&request).await.unwrap();
    let records = extract_recipes(&raw, &query);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Sure! Here are some ideas:");
    assert_eq!(records[1].title, "Egusi Soup");
    assert_eq!(records[1].ingredients, "melon seeds");
}

#[tokio::test]
async fn oversized_reply_never_exceeds_the_record_cap() {
    let query = IngredientQuery::parse(Some("beans")).unwrap();
    let many: Vec<String> = (0..10)
        .map(|i| format!(r#"{{"title":"Recipe {i}","ingredients":"beans","instructions":"cook"}}"#))
        .collect();
    let provider = FakeProvider::with_response("beans", &format!("[{}]", many.join(",")));

    let request = suggest_request(&query);
    let raw = provider.complete(&request).await.unwrap();
    let records = extract_recipes(&raw, &query);

    assert_eq!(records.len(), MAX_RECIPES);
}
