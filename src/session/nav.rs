/// Internal route of the projects timeline page.
pub const ROUTE_PROJECTS: &str = "/projects";

/// Internal route of the contact page.
pub const ROUTE_CONTACT: &str = "/contact";

/// Navigation collaborator supplied by the host shell.
///
/// The engine never routes by itself; it only tells the shell where to go.
/// Internal routes stay within the app; external URLs open in a new context.
pub trait Navigator {
    /// Route within the app.
    fn navigate(&mut self, route: &str);

    /// Open an external URL in a new context.
    fn open_external(&mut self, url: &str);
}
