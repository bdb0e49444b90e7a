//! Static assets and the generated QR page.

use qrid_core::user::User;
use qrid_render::Artifact;

pub const INDEX_HTML: &str = include_str!("../assets/index.html");
pub const MAIN_CSS: &str = include_str!("../assets/main.css");
pub const QR_CSS: &str = include_str!("../assets/qr.css");

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
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

/// The page shown after creating a user: name, id, copy button and code.
pub fn qr_page(user: &User, artifact: &Artifact) -> String {
  let name = escape_html(user.name.as_str());
  let id = &user.id;
  let src = artifact.data_uri();

  format!(
    r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>QR Code for {name}</title>
    <link rel="stylesheet" href="/styles/qr.css" />
  </head>
  <body>
    <div class="container">
      <h1>Your QR Code</h1>
      <div class="info">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>User ID:</strong> <span id="user-id">{id}</span></p>
        <button class="btn" id="copy-btn" type="button">Copy User ID</button>
        <span id="copy-status">Copied!</span>
      </div>
      <div class="qr-code">
        <img src="{src}" alt="QR Code for {name}" width="{side}" height="{side}" />
      </div>
      <div class="links">
        <a href="/user/{id}">View Profile</a> | <a href="/">&larr; Create Another User</a>
      </div>
    </div>
    <script>
      const copyBtn = document.getElementById('copy-btn');
      const copyStatus = document.getElementById('copy-status');
      copyBtn.onclick = function () {{
        const userId = document.getElementById('user-id').textContent;
        navigator.clipboard.writeText(userId).then(function () {{
          copyStatus.classList.add('show');
          setTimeout(function () {{ copyStatus.classList.remove('show'); }}, 1200);
        }});
      }};
    </script>
  </body>
</html>
"#,
    side = artifact.side,
  )
}
