mod components;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod companies;
pub use companies::Companies;

mod company_detail;
pub use company_detail::CompanyDetailPage;

mod subscriptions;
pub use subscriptions::Subscriptions;

mod payments;
pub use payments::Payments;
