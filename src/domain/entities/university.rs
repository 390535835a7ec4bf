//! University entity.

/// Input for inserting a university. The caller supplies the identity.
///
/// Universities are only ever written; reads go through the course listing,
/// which denormalizes these fields into each course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUniversity {
    pub id: i32,
    pub name_en: String,
    pub name_ch: String,
    pub city: String,
    pub is_from_daad: bool,
    pub is_tu9: bool,
    pub is_u15: bool,
    pub link: String,
    /// `0` means unranked and is stored as NULL.
    pub qs_ranking: i32,
}

impl NewUniversity {
    /// Ranking as stored: unranked universities have no value.
    pub fn stored_ranking(&self) -> Option<i32> {
        (self.qs_ranking > 0).then_some(self.qs_ranking)
    }
}
