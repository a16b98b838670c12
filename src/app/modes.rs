//! Focus and surface types.
//!
//! Key handling depends on which surface is on top:
//!
//! - **Favorites**: the favorites overlay is open
//! - **Details**: the selected card's detail modal is open
//! - **Main**: neither; keys go to the search box or the result list
//!   depending on [`Focus`]

/// Keyboard focus on the main surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the query.
    #[default]
    Search,
    /// Keys navigate and act on result cards.
    Results,
}

/// Topmost surface receiving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Main(Focus),
    Details,
    Favorites,
}
