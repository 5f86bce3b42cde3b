/// Inline stylesheet for the whole page.
pub const STYLESHEET: &str = r#"
  body {margin:0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color:#1b1b1b; background:#fcfbfa;}
  a {color:#8a4b3c;}
  .layout {display:flex; min-height:100vh;}
  .sidebar {width:220px; padding:1.5rem 1rem; background:#F7F4F3; border-right:1px solid #ececec;}
  .sidebar a {display:block; padding:0.45rem 0.75rem; margin-bottom:0.25rem; border-radius:10px; text-decoration:none; color:#463F3A;}
  .sidebar a.active {background:#E0AFA0; color:#1b1b1b; font-weight:600;}
  .content {flex:1; padding:1.5rem 2.5rem; max-width:1100px;}
  .header {display:flex; gap:1.5rem; align-items:center;}
  .app-title h1 {margin-bottom: 0.25rem;}
  .app-subtitle {color: #463F3A; font-weight: 600; margin-top: 0.1rem; margin-bottom: 0.5rem;}
  .chip {display:inline-block; padding:0.2rem 0.55rem; margin:0 0.25rem 0.25rem 0; border-radius:999px; background:#F7F4F3; border:1px solid #e8e8e8; font-size:0.82rem; text-decoration:none;}
  .card-grid {display:grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap:1rem;}
  .card {border-radius:16px; padding:1rem; background:white; border:1px solid #eee; box-shadow:0 2px 10px rgba(0,0,0,0.04);}
  .card img {width:100%; border-radius:12px; margin-bottom:0.5rem;}
  .pill {display:inline-block; background:#E0AFA0; color:#1b1b1b; padding:0.15rem 0.5rem; border-radius:999px; font-size:0.75rem; margin-right:0.35rem; margin-bottom:0.35rem; opacity:0.9; text-decoration:none;}
  a.pill {opacity:0.55;}
  a.pill.active {opacity:1; font-weight:600;}
  .soft {background:#F7F4F3; border:1px solid #ececec; border-radius:16px; padding:1rem;}
  .info {background:#eef4fb; border:1px solid #d5e4f5; border-radius:10px; padding:0.75rem 1rem;}
  .profile-img {width:128px; height:128px; border-radius:50%; object-fit:cover; border:3px solid #E0AFA0;}
  .profile-placeholder {width:128px; height:128px; border-radius:50%; display:flex; align-items:center; justify-content:center; background:#F7F4F3; border:3px dashed #E0AFA0; color:#555; font-weight:600;}
  .download {display:inline-block; padding:0.5rem 1rem; border-radius:10px; background:#E0AFA0; color:#1b1b1b; text-decoration:none; font-weight:600;}
  .download-note {font-size:0.9rem; color:#666;}
  .muted {color:#666; font-size:0.9rem;}
  .section-title {margin-top:0.25rem;}
  form.contact label {display:block; margin-top:0.75rem; font-weight:600;}
  form.contact input, form.contact textarea {width:100%; max-width:560px; padding:0.5rem; border-radius:8px; border:1px solid #ddd;}
  form.contact button {margin-top:1rem;}
  .footer-text {text-align:center; color:#666; font-size:0.85rem; margin-top:2rem;}
"#;
