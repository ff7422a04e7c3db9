use tokio::sync::mpsc;

use crate::domain::{Navigator, Route, RouteParams};

/// [`Navigator`] that posts every transition on a channel.
///
/// The event loop watches the receiving end and leaves the screen as soon as
/// a route arrives.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    routes: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (routes, rx) = mpsc::unbounded_channel();
        (Self { routes }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&mut self, route: &str, params: RouteParams) {
        let _ = self.routes.send(Route {
            route: route.to_string(),
            params,
        });
    }
}
