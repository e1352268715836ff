use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when an identifier is used as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client-side routes the admin front-end can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Drivers,
    DriverDetail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Drivers => String::from("/admin/drivers"),
            Route::DriverDetail(id) => {
                format!("/admin/driver/{}", utf8_percent_encode(id, PATH_SEGMENT))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
