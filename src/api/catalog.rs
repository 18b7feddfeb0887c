use crate::api::AppState;
use crate::api::schemas::catalog::{RootResponse, SearchQuery};
use crate::domain::catalog::{
    Building, ContactInfo, Course, DailyMenu, Event, GalleryAlbum, NewsArticle, QuickLink, RoomMatch, SchoolInfo,
    StaffMember, Teacher,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

// Id lookups answer `null` on a miss rather than 404; the mobile client relies on that.

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: "Pataky Technikum API" })
}

pub async fn school_info(State(state): State<AppState>) -> Json<&'static SchoolInfo> {
    Json(state.catalog.school_info())
}

pub async fn contact(State(state): State<AppState>) -> Json<&'static ContactInfo> {
    Json(state.catalog.contact())
}

pub async fn list_news(State(state): State<AppState>) -> Json<&'static [NewsArticle]> {
    Json(state.catalog.news())
}

pub async fn get_news(State(state): State<AppState>, Path(id): Path<String>) -> Json<Option<&'static NewsArticle>> {
    Json(state.catalog.news_by_id(&id))
}

pub async fn list_courses(State(state): State<AppState>) -> Json<&'static [Course]> {
    Json(state.catalog.courses())
}

pub async fn courses_by_type(
    State(state): State<AppState>,
    Path(course_type): Path<String>,
) -> Json<Vec<&'static Course>> {
    Json(state.catalog.courses_by_type(&course_type))
}

pub async fn list_staff(State(state): State<AppState>) -> Json<&'static [StaffMember]> {
    Json(state.catalog.staff())
}

pub async fn list_events(State(state): State<AppState>) -> Json<&'static [Event]> {
    Json(state.catalog.events())
}

pub async fn list_quick_links(State(state): State<AppState>) -> Json<&'static [QuickLink]> {
    Json(state.catalog.quick_links())
}

pub async fn list_teachers(State(state): State<AppState>) -> Json<&'static [Teacher]> {
    Json(state.catalog.teachers())
}

pub async fn search_teachers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<&'static Teacher>> {
    Json(state.catalog.search_teachers(&query.q))
}

pub async fn get_menu(State(state): State<AppState>) -> Json<&'static [DailyMenu]> {
    Json(state.catalog.menu())
}

pub async fn list_gallery(State(state): State<AppState>) -> Json<&'static [GalleryAlbum]> {
    Json(state.catalog.gallery())
}

pub async fn get_album(State(state): State<AppState>, Path(id): Path<String>) -> Json<Option<&'static GalleryAlbum>> {
    Json(state.catalog.album_by_id(&id))
}

pub async fn list_campus(State(state): State<AppState>) -> Json<&'static [Building]> {
    Json(state.catalog.campus())
}

pub async fn get_building(State(state): State<AppState>, Path(id): Path<String>) -> Json<Option<&'static Building>> {
    Json(state.catalog.building_by_id(&id))
}

pub async fn search_rooms(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Json<Vec<RoomMatch>> {
    Json(state.catalog.search_rooms(&query.q))
}
