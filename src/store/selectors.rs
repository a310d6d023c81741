//! Read-side helpers used by the home, menu and dish detail views.

use crate::domain::{Comment, Dish, DishId, Leader, Promotion};

use super::state::AppState;

impl AppState {
    /// First dish flagged for the home page.
    pub fn featured_dish(&self) -> Option<&Dish> {
        self.dishes.items().iter().find(|d| d.featured)
    }

    pub fn featured_promotion(&self) -> Option<&Promotion> {
        self.promotions.items().iter().find(|p| p.featured)
    }

    pub fn featured_leader(&self) -> Option<&Leader> {
        self.leaders.iter().find(|l| l.featured)
    }

    pub fn dish_by_id(&self, id: DishId) -> Option<&Dish> {
        self.dishes.items().iter().find(|d| d.id == id)
    }

    /// Comments for one dish, in slice order.
    pub fn comments_for_dish(&self, dish_id: DishId) -> Vec<&Comment> {
        self.comments
            .items()
            .iter()
            .filter(|c| c.dish_id == dish_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::action::SliceAction;
    use crate::store::reducer::slice;

    fn dish(id: DishId, featured: bool) -> Dish {
        Dish {
            id,
            name: format!("Dish {id}"),
            image: "images/dish.png".into(),
            category: "mains".into(),
            label: String::new(),
            price: "2.99".into(),
            featured,
            description: String::new(),
        }
    }

    fn comment(id: i64, dish_id: DishId) -> Comment {
        Comment {
            id,
            dish_id,
            rating: 5,
            comment: format!("comment {id}"),
            author: "Guest".into(),
            date: "2012-10-16T17:57:28.556094Z".into(),
        }
    }

    fn leader(id: i64, featured: bool) -> Leader {
        Leader {
            id,
            name: format!("Leader {id}"),
            image: "images/leader.png".into(),
            designation: "Chef".into(),
            abbr: "EC".into(),
            featured,
            description: String::new(),
        }
    }

    #[test]
    fn test_featured_picks_first_flagged() {
        let mut state = AppState::with_leaders(vec![leader(0, false), leader(1, true)]);
        slice::reduce(
            &mut state.dishes,
            SliceAction::Add(vec![dish(0, false), dish(1, true), dish(2, true)]),
        );

        assert_eq!(state.featured_dish().map(|d| d.id), Some(1));
        assert_eq!(state.featured_leader().map(|l| l.id), Some(1));
        assert!(state.featured_promotion().is_none());
    }

    #[test]
    fn test_dish_lookup_and_comment_filter() {
        let mut state = AppState::default();
        slice::reduce(
            &mut state.dishes,
            SliceAction::Add(vec![dish(0, true), dish(1, false)]),
        );
        slice::reduce(
            &mut state.comments,
            SliceAction::Add(vec![comment(0, 1), comment(1, 0), comment(2, 1)]),
        );

        assert_eq!(state.dish_by_id(1).map(|d| d.id), Some(1));
        assert!(state.dish_by_id(7).is_none());

        let ids: Vec<_> = state.comments_for_dish(1).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(state.comments_for_dish(9).is_empty());
    }
}
