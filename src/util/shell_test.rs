#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn entry_page_is_index() {
    assert_eq!(ENTRY_PAGE, "index.html");
}

#[test]
fn window_shell_is_noop_but_callable() {
    WindowShell.notify("Board \"Ops\" created.");
    WindowShell.navigate(ENTRY_PAGE);
}
