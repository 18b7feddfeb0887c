use crate::adapters::catalog;
use crate::domain::catalog::{
    Building, ContactInfo, Course, DailyMenu, Event, GalleryAlbum, NewsArticle, QuickLink, RoomMatch, SchoolInfo,
    StaffMember, Teacher,
};

/// Read-only queries over the static reference tables.
///
/// Id lookups return `None` on a miss; that is a normal answer, not an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogService;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl CatalogService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn school_info(&self) -> &'static SchoolInfo {
        &catalog::SCHOOL_INFO
    }

    #[must_use]
    pub fn contact(&self) -> &'static ContactInfo {
        &catalog::CONTACT_INFO
    }

    #[must_use]
    pub const fn news(&self) -> &'static [NewsArticle] {
        catalog::NEWS_ARTICLES
    }

    #[must_use]
    pub fn news_by_id(&self, id: &str) -> Option<&'static NewsArticle> {
        catalog::NEWS_ARTICLES.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub const fn courses(&self) -> &'static [Course] {
        catalog::COURSES
    }

    /// Courses whose type equals `kind` exactly.
    #[must_use]
    pub fn courses_by_type(&self, kind: &str) -> Vec<&'static Course> {
        catalog::COURSES.iter().filter(|c| c.kind == kind).collect()
    }

    #[must_use]
    pub const fn staff(&self) -> &'static [StaffMember] {
        catalog::STAFF_MEMBERS
    }

    #[must_use]
    pub const fn events(&self) -> &'static [Event] {
        catalog::EVENTS
    }

    #[must_use]
    pub const fn quick_links(&self) -> &'static [QuickLink] {
        catalog::QUICK_LINKS
    }

    #[must_use]
    pub const fn teachers(&self) -> &'static [Teacher] {
        catalog::TEACHERS
    }

    /// Case-insensitive substring match on name, subject or department.
    /// An empty query returns every teacher.
    #[must_use]
    pub fn search_teachers(&self, query: &str) -> Vec<&'static Teacher> {
        if query.is_empty() {
            return catalog::TEACHERS.iter().collect();
        }
        let q = query.to_lowercase();
        catalog::TEACHERS
            .iter()
            .filter(|t| contains_ci(t.name, &q) || contains_ci(t.subject, &q) || contains_ci(t.department, &q))
            .collect()
    }

    #[must_use]
    pub const fn menu(&self) -> &'static [DailyMenu] {
        catalog::WEEKLY_MENU
    }

    /// First menu entry whose date equals `date` (`YYYY-MM-DD`) exactly.
    #[must_use]
    pub fn menu_for_date(&self, date: &str) -> Option<&'static DailyMenu> {
        catalog::WEEKLY_MENU.iter().find(|m| m.date == date)
    }

    #[must_use]
    pub const fn gallery(&self) -> &'static [GalleryAlbum] {
        catalog::GALLERY_ALBUMS
    }

    #[must_use]
    pub fn album_by_id(&self, id: &str) -> Option<&'static GalleryAlbum> {
        catalog::GALLERY_ALBUMS.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub const fn campus(&self) -> &'static [Building] {
        catalog::CAMPUS_BUILDINGS
    }

    #[must_use]
    pub fn building_by_id(&self, id: &str) -> Option<&'static Building> {
        catalog::CAMPUS_BUILDINGS.iter().find(|b| b.id == id)
    }

    /// Rooms whose name or id contains `query`, ignoring case. An empty query matches nothing.
    #[must_use]
    pub fn search_rooms(&self, query: &str) -> Vec<RoomMatch> {
        if query.is_empty() {
            return Vec::new();
        }
        let q = query.to_lowercase();
        catalog::CAMPUS_BUILDINGS
            .iter()
            .flat_map(|building| {
                building.rooms.iter().map(move |room| RoomMatch {
                    room,
                    building: building.name,
                    building_code: building.code,
                })
            })
            .filter(|m| contains_ci(m.room.name, &q) || contains_ci(m.room.id, &q))
            .collect()
    }
}
