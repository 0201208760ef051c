//! Static pages: the SPA shell and the login document
//!
//! The login document is intentionally self-contained (inline styles and
//! script) because it is served by the gate before any asset route is
//! reachable.

use axum::response::Html;

/// Self-contained login document served with every 401 from the gate.
/// Submits the password as JSON to `/api/auth` and reloads on success.
pub const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Luminary</title>
<style>
*{margin:0;padding:0;box-sizing:border-box}
body{min-height:100vh;display:flex;align-items:center;justify-content:center;background:#09090b;color:#f0f0f5;font-family:-apple-system,BlinkMacSystemFont,'Inter',sans-serif}
.c{background:rgba(255,255,255,.03);border:1px solid rgba(255,255,255,.06);border-radius:16px;padding:40px;width:100%;max-width:380px;text-align:center;backdrop-filter:blur(20px)}
h1{font-size:22px;font-weight:600;margin-bottom:8px;letter-spacing:-.02em}
p{font-size:13px;color:#8a8a9a;margin-bottom:28px}
input{width:100%;padding:12px 16px;background:rgba(255,255,255,.04);border:1px solid rgba(255,255,255,.08);border-radius:10px;color:#f0f0f5;font-size:14px;outline:none;margin-bottom:14px}
input:focus{border-color:rgba(99,102,241,.5)}
button{width:100%;padding:12px;background:linear-gradient(135deg,#6366f1,#4f46e5);border:none;border-radius:10px;color:#fff;font-size:14px;font-weight:500;cursor:pointer}
button:hover{opacity:.9}
.e{font-size:13px;color:#f87171;margin-top:12px;min-height:16px}
</style>
</head>
<body>
<div class="c">
<h1>Luminary</h1>
<p>Enter your password to continue</p>
<form id="f" action="/api/auth" method="post">
<input type="password" id="pw" placeholder="Password" autofocus/>
<button type="submit">Continue</button>
</form>
<div class="e" id="err"></div>
</div>
<script>
document.getElementById('f').onsubmit=async function(e){
e.preventDefault();
var pw=document.getElementById('pw').value;
if(!pw)return;
var res=await fetch('/api/auth',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify({password:pw})});
if(res.ok){window.location.reload();}
else{document.getElementById('err').textContent='Wrong password';}
};
</script>
</body>
</html>"#;

/// Shell document the wizard client mounts into.
const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Luminary</title>
</head>
<body>
<div id="app"></div>
</body>
</html>"#;

/// Serve the SPA shell
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_posts_to_the_auth_endpoint() {
        assert!(LOGIN_PAGE.contains("action=\"/api/auth\""));
        assert!(LOGIN_PAGE.contains("fetch('/api/auth'"));
    }

    #[test]
    fn login_page_is_self_contained() {
        // No external scripts or stylesheets; everything is inline.
        assert!(!LOGIN_PAGE.contains("<link"));
        assert!(!LOGIN_PAGE.contains("src="));
    }

    #[tokio::test]
    async fn index_serves_the_shell() {
        let Html(body) = index().await;
        assert!(body.contains("id=\"app\""));
    }
}
