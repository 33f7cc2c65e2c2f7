//! Minimal inline HTML rendering for the contact pages.
//!
//! There is no template engine; pages are small enough to build as strings.
//! All user-supplied values pass through `escape` before landing in markup.

use crate::models::{Contact, ContactForm};

/// Escape a value for safe inclusion in HTML text or attribute context.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Base page layout.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

/// Banner shown above forms when a submission was rejected.
fn error_banner(message: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape(message))
}

/// Banner shown on the list page after a successful mutation.
fn notice_banner(message: &str) -> String {
    format!("<p class=\"notice\">{}</p>\n", escape(message))
}

/// The contact list page (`GET /`).
pub fn list_page(contacts: &[Contact], notice: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(message) = notice {
        body.push_str(&notice_banner(message));
    }
    body.push_str("<p><a href=\"/add\">Add contact</a></p>\n");

    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Name</th><th>Address</th><th>Email</th>\
             <th>Phone</th><th></th></tr>\n",
        );
        for contact in contacts {
            body.push_str(&format!(
                "<tr><td>{name}</td><td>{address}</td><td>{email}</td><td>{phone}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
                name = escape(&contact.full_name()),
                address = escape(&contact.address),
                email = escape(&contact.email),
                phone = escape(&contact.phone),
                id = contact.id,
            ));
        }
        body.push_str("</table>\n");
    }
    page("Contacts", &body)
}

/// Shared form markup for the add and edit pages, echoing submitted values.
fn contact_form(action: &str, form: &ContactForm, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(message) = error {
        body.push_str(&error_banner(message));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>First name <input name=\"first_name\" value=\"{first}\"></label><br>\n\
         <label>Last name <input name=\"last_name\" value=\"{last}\"></label><br>\n\
         <label>Address <input name=\"address\" value=\"{address}\"></label><br>\n\
         <label>Email <input name=\"email\" value=\"{email}\"></label><br>\n\
         <label>Phone <input name=\"phone\" value=\"{phone}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n<p><a href=\"/\">Back to contacts</a></p>\n",
        action = escape(action),
        first = escape(&form.first_name),
        last = escape(&form.last_name),
        address = escape(&form.address),
        email = escape(&form.email),
        phone = escape(&form.phone),
    ));
    body
}

/// The add-contact page (`GET /add`, and `POST /add` re-render on error).
pub fn add_page(form: &ContactForm, error: Option<&str>) -> String {
    page("Add Contact", &contact_form("/add", form, error))
}

/// The edit-contact page (`GET /edit/{id}`, and re-render on error).
pub fn edit_page(id: i64, form: &ContactForm, error: Option<&str>) -> String {
    page(
        "Edit Contact",
        &contact_form(&format!("/edit/{id}"), form, error),
    )
}

/// 404 page for an unknown contact id.
pub fn not_found_page(id: i64) -> String {
    page("Not Found", &format!("<p>No contact with id {id}.</p>"))
}

/// 500 page for storage faults.
pub fn server_error_page() -> String {
    page("Error", "<p>Something went wrong. Please try again.</p>")
}
