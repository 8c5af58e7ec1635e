pub mod animated_counter;
pub mod card_animated;
pub mod confirm_dialog;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
