//! Read-only reference records served to the mobile app.
//!
//! All records borrow `'static` data so the tables can live in plain statics.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchoolInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub founded: &'static str,
    pub motto: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLinks {
    pub facebook: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub fax: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub postal_address: &'static str,
    pub om_code: &'static str,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NewsArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
    pub image_url: Option<&'static str>,
    pub date: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    /// Programme kind, e.g. `technikum`, `szakkepzo`, `felnott`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaffMember {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub email: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Teacher {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub department: &'static str,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub office: Option<&'static str>,
    pub consultation_hours: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub allergens: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyMenu {
    pub day: &'static str,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: &'static str,
    pub soup: MenuItem,
    pub main_course: MenuItem,
    pub dessert: Option<MenuItem>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GalleryImage {
    pub id: &'static str,
    pub url: &'static str,
    pub thumbnail: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GalleryAlbum {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub cover_image: &'static str,
    pub image_count: u32,
    pub images: &'static [GalleryImage],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub floor: u8,
    pub building: &'static str,
    /// One of `classroom`, `lab`, `office`, `facility`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Building {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub floors: u8,
    pub description: &'static str,
    pub rooms: &'static [Room],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// A room search hit together with the building it belongs to.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoomMatch {
    pub room: &'static Room,
    pub building: &'static str,
    pub building_code: &'static str,
}
