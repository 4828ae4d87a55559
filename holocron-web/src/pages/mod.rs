mod catalogue;
mod contacts;
mod detail;
mod error;
mod favorites;
pub mod login;

pub use catalogue::CataloguePage;
pub use contacts::ContactsPage;
pub use detail::DetailPage;
pub use error::ErrorPage;
pub use favorites::FavoritesPage;
pub use login::LoginPage;
