//! Storage layer tests for the Flashdeck server.

#![allow(clippy::unwrap_used)]

use super::db::FlashcardDatabase;
use super::queries_cards::CardParams;
use flashdeck_core::db::DatabaseError;

async fn test_db() -> FlashcardDatabase {
    FlashcardDatabase::open_in_memory().await.unwrap()
}

const fn text_card<'a>(term: &'a str, definition: &'a str) -> CardParams<'a> {
    CardParams {
        term,
        definition,
        term_image: None,
        definition_image: None,
    }
}

// === Deck tests ===

#[tokio::test]
async fn create_and_list_decks() {
    let db = test_db().await;
    let spanish = db.create_deck("Spanish").await.unwrap();
    db.create_deck("French").await.unwrap();

    assert_eq!(spanish.name, "Spanish");
    assert_eq!(spanish.card_count, 0);

    let decks = db.list_decks().await.unwrap();
    let names: Vec<_> = decks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["French", "Spanish"]);
}

#[tokio::test]
async fn duplicate_deck_name_is_conflict() {
    let db = test_db().await;
    db.create_deck("Spanish").await.unwrap();

    let err = db.create_deck("Spanish").await.unwrap_err();
    assert!(matches!(err, DatabaseError::Conflict(_)));
    assert_eq!(db.list_decks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deck_names_are_case_sensitive() {
    let db = test_db().await;
    db.create_deck("Spanish").await.unwrap();
    db.create_deck("spanish").await.unwrap();
    assert_eq!(db.list_decks().await.unwrap().len(), 2);
}

#[tokio::test]
async fn card_count_is_derived() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    db.create_card(deck.id, &text_card("perro", "dog"))
        .await
        .unwrap();

    let decks = db.list_decks().await.unwrap();
    assert_eq!(decks[0].card_count, 1);
    assert_eq!(db.get_deck(deck.id).await.unwrap().card_count, 1);
}

#[tokio::test]
async fn rename_deck() {
    let db = test_db().await;
    let deck = db.create_deck("Spanihs").await.unwrap();

    let renamed = db.rename_deck(deck.id, "Spanish").await.unwrap();
    assert_eq!(renamed.id, deck.id);
    assert_eq!(renamed.name, "Spanish");
}

#[tokio::test]
async fn rename_missing_deck_is_not_found() {
    let db = test_db().await;
    let err = db.rename_deck(42, "Anything").await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

#[tokio::test]
async fn rename_to_taken_name_is_conflict() {
    let db = test_db().await;
    db.create_deck("Spanish").await.unwrap();
    let french = db.create_deck("French").await.unwrap();

    let err = db.rename_deck(french.id, "Spanish").await.unwrap_err();
    assert!(matches!(err, DatabaseError::Conflict(_)));
}

#[tokio::test]
async fn delete_deck_cascades_to_cards() {
    let db = test_db().await;
    let spanish = db.create_deck("Spanish").await.unwrap();
    let french = db.create_deck("French").await.unwrap();
    db.create_card(spanish.id, &text_card("perro", "dog"))
        .await
        .unwrap();
    db.create_card(spanish.id, &text_card("gato", "cat"))
        .await
        .unwrap();
    db.create_card(french.id, &text_card("chien", "dog"))
        .await
        .unwrap();

    db.delete_deck(spanish.id).await.unwrap();

    assert!(db.list_cards(spanish.id).await.unwrap().is_empty());
    assert_eq!(db.list_cards(french.id).await.unwrap().len(), 1);
    assert!(matches!(
        db.get_deck(spanish.id).await.unwrap_err(),
        DatabaseError::NotFound(_)
    ));
}

#[tokio::test]
async fn delete_missing_deck_is_not_found() {
    let db = test_db().await;
    let err = db.delete_deck(7).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

// === Card tests ===

#[tokio::test]
async fn create_card_defaults_review_to_false() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    let card = db
        .create_card(
            deck.id,
            &CardParams {
                term: "perro",
                definition: "dog",
                term_image: Some("data:image/png;base64,AAAA"),
                definition_image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(card.deck_id, deck.id);
    assert_eq!(card.term, "perro");
    assert_eq!(card.term_image.as_deref(), Some("data:image/png;base64,AAAA"));
    assert!(card.definition_image.is_none());
    assert!(!card.review);
}

#[tokio::test]
async fn create_card_for_missing_deck_is_invalid_reference() {
    let db = test_db().await;
    let err = db
        .create_card(99, &text_card("perro", "dog"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidReference(_)));
}

#[tokio::test]
async fn list_cards_ordered_by_id() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    let a = db.create_card(deck.id, &text_card("uno", "one")).await.unwrap();
    let b = db.create_card(deck.id, &text_card("dos", "two")).await.unwrap();
    let c = db.create_card(deck.id, &text_card("tres", "three")).await.unwrap();

    let ids: Vec<_> = db
        .list_cards(deck.id)
        .await
        .unwrap()
        .iter()
        .map(|card| card.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn update_card_replaces_all_content() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    let card = db
        .create_card(
            deck.id,
            &CardParams {
                term: "perro",
                definition: "dog",
                term_image: Some("data:image/png;base64,AAAA"),
                definition_image: None,
            },
        )
        .await
        .unwrap();
    db.set_card_review(card.id, true).await.unwrap();

    let updated = db
        .update_card(
            card.id,
            &CardParams {
                term: "el perro",
                definition: "the dog",
                term_image: None,
                definition_image: Some("data:image/gif;base64,R0lG"),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.term, "el perro");
    assert_eq!(updated.definition, "the dog");
    assert!(updated.term_image.is_none());
    assert_eq!(updated.definition_image.as_deref(), Some("data:image/gif;base64,R0lG"));
    assert!(updated.review, "content update leaves the review flag alone");
}

#[tokio::test]
async fn update_missing_card_is_not_found() {
    let db = test_db().await;
    let err = db
        .update_card(5, &text_card("a", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

#[tokio::test]
async fn delete_card() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    let card = db.create_card(deck.id, &text_card("perro", "dog")).await.unwrap();

    db.delete_card(card.id).await.unwrap();
    assert!(db.list_cards(deck.id).await.unwrap().is_empty());

    let err = db.delete_card(card.id).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

// === Review pile tests ===

#[tokio::test]
async fn review_pile_spans_decks() {
    let db = test_db().await;
    let spanish = db.create_deck("Spanish").await.unwrap();
    let french = db.create_deck("French").await.unwrap();
    let perro = db.create_card(spanish.id, &text_card("perro", "dog")).await.unwrap();
    db.create_card(spanish.id, &text_card("gato", "cat")).await.unwrap();
    let chien = db.create_card(french.id, &text_card("chien", "dog")).await.unwrap();

    db.set_card_review(chien.id, true).await.unwrap();
    db.set_card_review(perro.id, true).await.unwrap();

    let ids: Vec<_> = db
        .list_review_pile()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![perro.id, chien.id]);
}

#[tokio::test]
async fn set_review_on_missing_card_is_not_found() {
    let db = test_db().await;
    let err = db.set_card_review(3, true).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

#[tokio::test]
async fn clear_review_pile_unflags_without_deleting() {
    let db = test_db().await;
    let deck = db.create_deck("Spanish").await.unwrap();
    let perro = db.create_card(deck.id, &text_card("perro", "dog")).await.unwrap();
    let gato = db.create_card(deck.id, &text_card("gato", "cat")).await.unwrap();
    db.set_card_review(perro.id, true).await.unwrap();
    db.set_card_review(gato.id, true).await.unwrap();

    assert_eq!(db.clear_review_pile().await.unwrap(), 2);
    assert!(db.list_review_pile().await.unwrap().is_empty());
    assert_eq!(db.list_cards(deck.id).await.unwrap().len(), 2);
    assert!(!db.get_card(perro.id).await.unwrap().review);

    assert_eq!(db.clear_review_pile().await.unwrap(), 0);
}
