use askama::Template;
use axum::response::IntoResponse;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

#[derive(Template)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

pub async fn welcome() -> impl IntoResponse {
    WelcomeTemplate {}
}

pub async fn home() -> impl IntoResponse {
    HomeTemplate {}
}

pub async fn about() -> impl IntoResponse {
    AboutTemplate {}
}

pub async fn contact() -> impl IntoResponse {
    ContactTemplate {}
}
