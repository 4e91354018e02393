//! # Views
//!
//! Pure rendering of loader data: a sidebar (search, "New", contact list) and a detail pane.
//! Every string coming from a contact or the query is escaped before it lands in markup.
use roster::{
    Contact,
    payloads::{RootData, SEARCH_PARAM, contact_path, destroy_path, edit_path},
};

use crate::utils::escape;

const NO_NAME: &str = "No Name";

pub enum Detail<'a> {
    Index,
    Contact(&'a Contact),
    Edit(&'a Contact),
    NotFound(&'a str),
}

impl Detail<'_> {
    fn active_id(&self) -> Option<&str> {
        match self {
            Detail::Contact(contact) | Detail::Edit(contact) => Some(contact.id.as_str()),
            Detail::NotFound(id) => Some(*id),
            Detail::Index => None,
        }
    }
}

pub fn page(root: &RootData, detail: Detail) -> String {
    let body = match &detail {
        Detail::Index => index(),
        Detail::Contact(contact) => contact_detail(contact),
        Detail::Edit(contact) => edit_form(contact),
        Detail::NotFound(id) => not_found(id),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Contacts</title>
</head>
<body>
{sidebar}
<div id="detail">
{body}
</div>
</body>
</html>
"#,
        sidebar = sidebar(root, detail.active_id()),
    )
}

fn sidebar(root: &RootData, active: Option<&str>) -> String {
    let q = escape(root.q.as_deref().unwrap_or_default());

    format!(
        r#"<div id="sidebar">
<h1>Contacts</h1>
<div>
<form id="search-form" role="search" action="/" method="get">
<input id="q" aria-label="Search contacts" placeholder="Search" type="search" name="{SEARCH_PARAM}" value="{q}">
</form>
<form action="/" method="post">
<button type="submit">New</button>
</form>
</div>
<nav>
{list}
</nav>
</div>"#,
        list = contact_list(&root.contacts, active),
    )
}

fn contact_list(contacts: &[Contact], active: Option<&str>) -> String {
    if contacts.is_empty() {
        return "<p><i>No contacts</i></p>".to_string();
    }

    let items: String = contacts
        .iter()
        .map(|contact| {
            let class = if active == Some(contact.id.as_str()) {
                r#" class="active""#
            } else {
                ""
            };

            let name = match contact.display_name() {
                Some(name) => escape(&name),
                None => format!("<i>{NO_NAME}</i>"),
            };

            let star = if contact.favorite { " <span>★</span>" } else { "" };

            format!(
                r#"<li><a href="{href}"{class}>{name}{star}</a></li>"#,
                href = contact_path(&contact.id),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("<ul>\n{items}\n</ul>")
}

fn index() -> String {
    r#"<p id="index-page">This is a contacts demo.<br>Pick a contact from the sidebar or press "New".</p>"#
        .to_string()
}

fn contact_detail(contact: &Contact) -> String {
    let name = match contact.display_name() {
        Some(name) => escape(&name),
        None => format!("<i>{NO_NAME}</i>"),
    };

    let avatar = contact
        .avatar
        .as_deref()
        .map(|avatar| format!(r#"<div><img alt="{name} avatar" src="{}"></div>"#, escape(avatar)))
        .unwrap_or_default();

    let twitter = contact
        .twitter
        .as_deref()
        .map(|handle| {
            let handle = escape(handle);
            let path = handle.trim_start_matches('@');
            format!(r#"<p><a href="https://twitter.com/{path}">{handle}</a></p>"#)
        })
        .unwrap_or_default();

    let notes = contact
        .notes
        .as_deref()
        .map(|notes| format!("<p>{}</p>", escape(notes)))
        .unwrap_or_default();

    let (next, label, star) = if contact.favorite {
        ("false", "Remove from favorites", "★")
    } else {
        ("true", "Add to favorites", "☆")
    };

    format!(
        r#"<div id="contact">
{avatar}
<div>
<h1>{name}
<form method="post" action="{detail}">
<button aria-label="{label}" name="favorite" value="{next}">{star}</button>
</form>
</h1>
{twitter}
{notes}
<div>
<form action="{edit}" method="get">
<button type="submit">Edit</button>
</form>
<form action="{destroy}" method="post" onsubmit="return confirm('Please confirm you want to delete this record.');">
<button type="submit">Delete</button>
</form>
</div>
</div>
</div>"#,
        detail = contact_path(&contact.id),
        edit = edit_path(&contact.id),
        destroy = destroy_path(&contact.id),
    )
}

fn edit_form(contact: &Contact) -> String {
    let value = |field: &Option<String>| escape(field.as_deref().unwrap_or_default());

    format!(
        r#"<form id="contact-form" method="post" action="{action}">
<p>
<span>Name</span>
<input aria-label="First name" name="first" type="text" placeholder="First" value="{first}">
<input aria-label="Last name" name="last" type="text" placeholder="Last" value="{last}">
</p>
<label><span>Twitter</span><input name="twitter" type="text" placeholder="@jack" value="{twitter}"></label>
<label><span>Avatar URL</span><input aria-label="Avatar URL" name="avatar" type="text" placeholder="https://example.com/avatar.jpg" value="{avatar}"></label>
<label><span>Notes</span><textarea name="notes" rows="6">{notes}</textarea></label>
<p>
<button type="submit">Save</button>
<button type="button" onclick="history.back()">Cancel</button>
</p>
</form>"#,
        action = edit_path(&contact.id),
        first = value(&contact.first),
        last = value(&contact.last),
        twitter = value(&contact.twitter),
        avatar = value(&contact.avatar),
        notes = value(&contact.notes),
    )
}

fn not_found(id: &str) -> String {
    format!(
        r#"<div id="not-found"><h1>Not Found</h1><p>No contact found for {}</p></div>"#,
        escape(id)
    )
}
