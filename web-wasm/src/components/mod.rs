pub mod header;
pub mod recommendation_card;
pub mod recommendation_list;
pub mod upload_form;
