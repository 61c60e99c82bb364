use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

const DEFAULT_COLUMNS: [(&str, &str); 3] = [
    ("todo", "To Do"),
    ("in-progress", "In Progress"),
    ("done", "Done"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A named column; cards are kept in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    pub columns: Vec<Column>,
}

impl Default for KanbanBoard {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS
                .iter()
                .map(|(id, title)| Column {
                    id: id.to_string(),
                    title: title.to_string(),
                    cards: Vec::new(),
                })
                .collect(),
        }
    }
}

fn clean_title(title: &str, what: &str) -> DeskResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DeskError::invalid(format!("{what} title cannot be empty")));
    }
    Ok(title.to_string())
}

impl KanbanBoard {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn cards(&self, column_id: &str) -> &[Card] {
        self.column(column_id).map(|c| c.cards.as_slice()).unwrap_or(&[])
    }

    /// Position of a card as (column index, card index).
    pub fn find(&self, id: &str) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col, column)| {
            column
                .cards
                .iter()
                .position(|card| card.id == id)
                .map(|idx| (col, idx))
        })
    }

    pub fn add_column(&mut self, title: &str) -> DeskResult<String> {
        let title = clean_title(title, "Column")?;
        let id = uuid::Uuid::new_v4().to_string();
        self.columns.push(Column {
            id: id.clone(),
            title,
            cards: Vec::new(),
        });
        Ok(id)
    }

    pub fn rename_column(&mut self, column_id: &str, title: &str) -> DeskResult<()> {
        let title = clean_title(title, "Column")?;
        let idx = self.column_index(column_id)?;
        self.columns[idx].title = title;
        Ok(())
    }

    /// Deletes the column and every card in it.
    pub fn remove_column(&mut self, column_id: &str) -> Option<Column> {
        let idx = self.columns.iter().position(|c| c.id == column_id)?;
        Some(self.columns.remove(idx))
    }

    pub fn add_card(
        &mut self,
        column_id: &str,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> DeskResult<String> {
        let title = clean_title(title, "Card")?;
        let col = self.column_index(column_id)?;
        let id = uuid::Uuid::new_v4().to_string();
        self.columns[col].cards.push(Card {
            id: id.clone(),
            title,
            description: description.trim().to_string(),
            created_at: now,
        });
        Ok(id)
    }

    pub fn edit_card(&mut self, id: &str, title: &str, description: &str) -> DeskResult<()> {
        let title = clean_title(title, "Card")?;
        let (col, idx) = self.locate(id)?;
        let card = &mut self.columns[col].cards[idx];
        card.title = title;
        card.description = description.trim().to_string();
        Ok(())
    }

    pub fn remove_card(&mut self, id: &str) -> Option<Card> {
        let (col, idx) = self.find(id)?;
        Some(self.columns[col].cards.remove(idx))
    }

    /// Shift a card one column left or right; cards at the edge stay put.
    /// Returns the id of the column the card ends up in.
    pub fn move_card(&mut self, id: &str, direction: MoveDirection) -> DeskResult<String> {
        let (col, idx) = self.locate(id)?;
        let target = match direction {
            MoveDirection::Left => col.checked_sub(1),
            MoveDirection::Right => (col + 1 < self.columns.len()).then_some(col + 1),
        };
        let Some(target) = target else {
            return Ok(self.columns[col].id.clone());
        };
        let card = self.columns[col].cards.remove(idx);
        self.columns[target].cards.push(card);
        Ok(self.columns[target].id.clone())
    }

    /// Drop a card at `index` within a column (clamped to the column length).
    pub fn move_card_to(&mut self, id: &str, column_id: &str, index: usize) -> DeskResult<()> {
        let target = self.column_index(column_id)?;
        let (from, idx) = self.locate(id)?;
        let card = self.columns[from].cards.remove(idx);
        let cards = &mut self.columns[target].cards;
        let index = index.min(cards.len());
        cards.insert(index, card);
        Ok(())
    }

    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.columns
            .iter()
            .map(|c| (c.id.as_str(), c.cards.len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    fn column_index(&self, column_id: &str) -> DeskResult<usize> {
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| DeskError::invalid(format!("Unknown column: {column_id}")))
    }

    fn locate(&self, id: &str) -> DeskResult<(usize, usize)> {
        self.find(id)
            .ok_or_else(|| DeskError::invalid(format!("Unknown card: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(titles: &[&str]) -> (KanbanBoard, Vec<String>) {
        let mut board = KanbanBoard::default();
        let ids = titles
            .iter()
            .map(|t| board.add_card("todo", t, "", Utc::now()).unwrap())
            .collect();
        (board, ids)
    }

    fn titles(board: &KanbanBoard, column_id: &str) -> Vec<String> {
        board
            .cards(column_id)
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    #[test]
    fn new_board_has_three_default_columns() {
        let board = KanbanBoard::default();
        let names: Vec<_> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(names, ["To Do", "In Progress", "Done"]);
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn add_card_validates_title() {
        let mut board = KanbanBoard::default();
        assert!(board.add_card("todo", "  ", "", Utc::now()).is_err());
        assert!(board.add_card("nope", "x", "", Utc::now()).is_err());
        let id = board
            .add_card("in-progress", " Ship it ", " soon ", Utc::now())
            .unwrap();
        assert_eq!(board.find(&id), Some((1, 0)));
        assert_eq!(board.cards("in-progress")[0].title, "Ship it");
        assert_eq!(board.cards("in-progress")[0].description, "soon");
    }

    #[test]
    fn move_card_walks_columns_and_stops_at_edges() {
        let (mut board, ids) = board_with(&["task"]);
        let id = &ids[0];
        assert_eq!(board.move_card(id, MoveDirection::Left).unwrap(), "todo");
        assert_eq!(
            board.move_card(id, MoveDirection::Right).unwrap(),
            "in-progress"
        );
        assert_eq!(board.move_card(id, MoveDirection::Right).unwrap(), "done");
        assert_eq!(board.move_card(id, MoveDirection::Right).unwrap(), "done");
        assert_eq!(board.total(), 1);
    }

    #[test]
    fn move_card_to_inserts_at_clamped_index() {
        let (mut board, ids) = board_with(&["a", "b", "c"]);
        board.move_card_to(&ids[2], "todo", 0).unwrap();
        assert_eq!(titles(&board, "todo"), ["c", "a", "b"]);

        board.move_card_to(&ids[0], "done", 99).unwrap();
        assert_eq!(board.find(&ids[0]), Some((2, 0)));
        assert_eq!(
            board.counts(),
            [("todo", 2), ("in-progress", 0), ("done", 1)]
        );
        assert!(board.move_card_to(&ids[1], "gone", 0).is_err());
        assert_eq!(board.total(), 3);
    }

    #[test]
    fn edit_and_remove() {
        let (mut board, ids) = board_with(&["a"]);
        board.edit_card(&ids[0], "renamed", "details").unwrap();
        assert_eq!(board.cards("todo")[0].title, "renamed");
        assert!(board.edit_card(&ids[0], "", "").is_err());

        let removed = board.remove_card(&ids[0]).unwrap();
        assert_eq!(removed.title, "renamed");
        assert!(board.remove_card(&ids[0]).is_none());
        assert!(board.move_card(&ids[0], MoveDirection::Left).is_err());
    }

    #[test]
    fn added_column_joins_the_right_edge() {
        let (mut board, ids) = board_with(&["task"]);
        let review = board.add_column(" Review ").unwrap();
        assert!(board.add_column("   ").is_err());
        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.columns[3].title, "Review");

        board.move_card_to(&ids[0], "done", 0).unwrap();
        assert_eq!(board.move_card(&ids[0], MoveDirection::Right).unwrap(), review);
        assert_eq!(board.move_card(&ids[0], MoveDirection::Right).unwrap(), review);
    }

    #[test]
    fn rename_column_validates() {
        let mut board = KanbanBoard::default();
        board.rename_column("done", "Shipped").unwrap();
        assert_eq!(board.column("done").unwrap().title, "Shipped");
        assert!(board.rename_column("done", " ").is_err());
        assert!(board.rename_column("missing", "x").is_err());
    }

    #[test]
    fn removing_a_column_deletes_its_cards() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.add_card("done", "kept", "", Utc::now()).unwrap();

        let removed = board.remove_column("todo").unwrap();
        assert_eq!(removed.cards.len(), 2);
        assert!(board.find(&ids[0]).is_none());
        assert_eq!(board.total(), 1);
        assert!(board.remove_column("todo").is_none());
        assert!(board.add_card("todo", "x", "", Utc::now()).is_err());

        // Neighbors are now computed over the remaining columns.
        let kept = board.cards("done")[0].id.clone();
        assert_eq!(
            board.move_card(&kept, MoveDirection::Left).unwrap(),
            "in-progress"
        );
    }

    #[test]
    fn board_survives_a_save_round() {
        let (mut board, _) = board_with(&["a"]);
        board.add_column("Later").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let loaded: KanbanBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, board);
    }
}
