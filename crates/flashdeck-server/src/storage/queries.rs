//! Deck queries for the Flashdeck server.

use flashdeck_core::db::DatabaseError;
use flashdeck_core::Deck;

use super::db::FlashcardDatabase;

const LIST_DECKS_SQL: &str = "SELECT d.id, d.name, COUNT(c.id) AS card_count \
     FROM decks d LEFT JOIN cards c ON c.deck_id = d.id \
     GROUP BY d.id, d.name ORDER BY d.name, d.id";

const GET_DECK_SQL: &str = "SELECT d.id, d.name, COUNT(c.id) AS card_count \
     FROM decks d LEFT JOIN cards c ON c.deck_id = d.id \
     WHERE d.id = ? GROUP BY d.id, d.name";

impl FlashcardDatabase {
    /// List every deck with its card count, ordered by name then id.
    pub async fn list_decks(&self) -> Result<Vec<Deck>, DatabaseError> {
        let decks = sqlx::query_as::<_, Deck>(LIST_DECKS_SQL)
            .fetch_all(self.pool())
            .await?;

        Ok(decks)
    }

    /// Get a deck by ID.
    pub async fn get_deck(&self, id: i64) -> Result<Deck, DatabaseError> {
        sqlx::query_as::<_, Deck>(GET_DECK_SQL)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Deck {id}")))
    }

    /// Create a deck. An existing name is reported as `Conflict` and
    /// nothing is inserted.
    pub async fn create_deck(&self, name: &str) -> Result<Deck, DatabaseError> {
        let inserted: Option<(i64,)> = sqlx::query_as(
            "INSERT INTO decks (name) VALUES (?) ON CONFLICT (name) DO NOTHING RETURNING id",
        )
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        let Some((id,)) = inserted else {
            return Err(DatabaseError::Conflict(format!("Deck name {name}")));
        };

        self.get_deck(id).await
    }

    /// Rename a deck.
    pub async fn rename_deck(&self, id: i64, name: &str) -> Result<Deck, DatabaseError> {
        let result = sqlx::query("UPDATE decks SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Deck {id}")));
        }

        self.get_deck(id).await
    }

    /// Remove a deck and all of its cards (transactionally).
    pub async fn delete_deck(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool().begin().await?;

        sqlx::query("DELETE FROM cards WHERE deck_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM decks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping `tx` rolls back.
            return Err(DatabaseError::NotFound(format!("Deck {id}")));
        }

        tx.commit().await?;

        Ok(())
    }
}
