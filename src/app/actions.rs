//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to the host. It
//! returns actions and the plugin shim performs them in order:
//!
//! | action       | host call                                   |
//! |--------------|---------------------------------------------|
//! | `CloseFocus` | `hide_self()`                               |
//! | `SetTimeout` | `set_timeout(seconds)`                      |
//! | `Fetch`      | `web_request(url, GET, .., tag context)`    |

use crate::directory::DirectoryRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms one host timer. Its firing comes back as
    /// [`Event::TimerElapsed`](crate::app::Event::TimerElapsed).
    SetTimeout {
        seconds: f64,
    },

    /// Performs a directory GET. The response comes back as
    /// [`Event::DirectoryResponse`](crate::app::Event::DirectoryResponse)
    /// carrying the request's tag.
    Fetch(DirectoryRequest),
}
