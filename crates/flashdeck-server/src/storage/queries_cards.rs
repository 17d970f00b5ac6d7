//! Card and review pile queries for the Flashdeck server.

use flashdeck_core::db::DatabaseError;
use flashdeck_core::Card;

use super::db::FlashcardDatabase;

/// Validated card content, shared by create and full update.
#[derive(Debug, Clone, Copy)]
pub struct CardParams<'a> {
    pub term: &'a str,
    pub definition: &'a str,
    pub term_image: Option<&'a str>,
    pub definition_image: Option<&'a str>,
}

impl FlashcardDatabase {
    /// List all cards of a deck, ordered by id.
    pub async fn list_cards(&self, deck_id: i64) -> Result<Vec<Card>, DatabaseError> {
        let cards = sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE deck_id = ? ORDER BY id")
            .bind(deck_id)
            .fetch_all(self.pool())
            .await?;

        Ok(cards)
    }

    /// Get a card by ID.
    pub async fn get_card(&self, id: i64) -> Result<Card, DatabaseError> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Card {id}")))
    }

    /// Create a card in a deck. New cards are never flagged for review.
    pub async fn create_card(
        &self,
        deck_id: i64,
        params: &CardParams<'_>,
    ) -> Result<Card, DatabaseError> {
        let card = sqlx::query_as::<_, Card>(
            "INSERT INTO cards (deck_id, term, definition, term_image, definition_image, review) \
             VALUES (?, ?, ?, ?, ?, FALSE) RETURNING *",
        )
        .bind(deck_id)
        .bind(params.term)
        .bind(params.definition)
        .bind(params.term_image)
        .bind(params.definition_image)
        .fetch_one(self.pool())
        .await?;

        Ok(card)
    }

    /// Replace a card's term, definition and both images.
    pub async fn update_card(&self, id: i64, params: &CardParams<'_>) -> Result<Card, DatabaseError> {
        sqlx::query_as::<_, Card>(
            "UPDATE cards SET term = ?, definition = ?, term_image = ?, definition_image = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(params.term)
        .bind(params.definition)
        .bind(params.term_image)
        .bind(params.definition_image)
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("Card {id}")))
    }

    /// Remove a card.
    pub async fn delete_card(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Card {id}")));
        }
        Ok(())
    }

    /// Set or clear a card's review flag. Nothing else on the card changes.
    pub async fn set_card_review(&self, id: i64, review: bool) -> Result<Card, DatabaseError> {
        sqlx::query_as::<_, Card>("UPDATE cards SET review = ? WHERE id = ? RETURNING *")
            .bind(review)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Card {id}")))
    }

    // =========================================================================
    // Review pile
    // =========================================================================

    /// All cards flagged for review across every deck, ordered by id.
    pub async fn list_review_pile(&self) -> Result<Vec<Card>, DatabaseError> {
        let cards = sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE review = TRUE ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        Ok(cards)
    }

    /// Unflag every card in the review pile. Returns how many were cleared.
    pub async fn clear_review_pile(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE cards SET review = FALSE WHERE review = TRUE")
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
