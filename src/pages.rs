//! Server-rendered pages. Pure string assembly: urgency is decided by the
//! store layer and arrives here pre-computed.

use crate::store::item::{Task, Urgency};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn login_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Login - Assignment Tracker</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }
        .login-container {
            background: white;
            border-radius: 15px;
            padding: 50px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.2);
            max-width: 400px;
            width: 100%;
        }
        h1 { color: #333; margin-bottom: 10px; text-align: center; font-size: 2.5em; }
        .subtitle { text-align: center; color: #666; margin-bottom: 40px; }
        label { display: block; margin-bottom: 8px; color: #555; font-weight: 600; }
        input {
            width: 100%;
            padding: 12px;
            border: 2px solid #ddd;
            border-radius: 5px;
            font-size: 16px;
            margin-bottom: 25px;
        }
        input:focus { outline: none; border-color: #667eea; }
        button {
            width: 100%;
            background: #667eea;
            color: white;
            border: none;
            padding: 14px;
            border-radius: 5px;
            font-size: 16px;
            font-weight: 600;
            cursor: pointer;
        }
        button:hover { background: #5568d3; }
    </style>
</head>
<body>
    <div class="login-container">
        <h1>&#128218;</h1>
        <p class="subtitle">Assignment Tracker</p>
        <form method="POST" action="/login">
            <label for="username">Username:</label>
            <input type="text" id="username" name="username" required autofocus>
            <button type="submit">Login</button>
        </form>
    </div>
</body>
</html>
"#
    .to_string()
}

pub fn tasks_page(username: &str, tasks: &[(Task, Urgency)]) -> String {
    let mut cards = String::new();
    if tasks.is_empty() {
        cards.push_str(
            r#"            <div class="empty-state">
                <p>No active items yet!</p>
                <p>Add your first assignment or event above.</p>
            </div>
"#,
        );
    } else {
        for (task, urgency) in tasks {
            let (card_class, notice) = match urgency {
                Urgency::Overdue => (
                    "task-card overdue",
                    r#"<span class="notice">OVERDUE!</span>"#,
                ),
                Urgency::Approaching => (
                    "task-card approaching",
                    r#"<span class="notice warning">Due Soon</span>"#,
                ),
                Urgency::Normal => ("task-card", ""),
            };

            cards.push_str(&format!(
                r#"            <div class="{card_class}">
                <div class="task-header">
                    <div class="task-title">{title}{notice}</div>
                    <span class="category-badge">{category}</span>
                </div>
"#,
                title = escape(&task.title),
                category = task.category.as_str(),
            ));
            if !task.description.is_empty() {
                cards.push_str(&format!(
                    "                <div class=\"task-description\">{}</div>\n",
                    escape(&task.description)
                ));
            }
            cards.push_str(&format!(
                r#"                <div class="task-footer">
                    <div class="due-date">Due: {due}</div>
                    <form method="POST" action="/done">
                        <input type="hidden" name="id" value="{id}">
                        <button type="submit" class="btn-done">&#10003; Mark Done</button>
                    </form>
                </div>
            </div>
"#,
                due = task.due.format("%Y-%m-%d"),
                id = task.id,
            ));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Assignment Tracker</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }}
        .container {{ max-width: 800px; margin: 0 auto; }}
        h1 {{ color: white; margin-bottom: 20px; }}
        h2 {{ margin-bottom: 20px; color: #333; }}
        .user-header {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: white;
            border-radius: 10px;
            padding: 15px 25px;
            margin-bottom: 25px;
        }}
        .btn-logout {{
            background: #e74c3c;
            color: white;
            border: none;
            padding: 8px 16px;
            border-radius: 5px;
            cursor: pointer;
        }}
        .form-container {{
            background: white;
            border-radius: 10px;
            padding: 30px;
            margin-bottom: 30px;
        }}
        .form-group {{ margin-bottom: 18px; }}
        label {{ display: block; margin-bottom: 6px; color: #555; font-weight: 600; }}
        input, textarea, select {{
            width: 100%;
            padding: 10px;
            border: 2px solid #ddd;
            border-radius: 5px;
            font-size: 15px;
        }}
        .form-container button {{
            background: #667eea;
            color: white;
            border: none;
            padding: 12px 24px;
            border-radius: 5px;
            font-size: 15px;
            cursor: pointer;
        }}
        .task-card {{
            background: white;
            border-radius: 10px;
            padding: 20px;
            margin-bottom: 15px;
            border-left: 5px solid #667eea;
        }}
        .task-card.approaching {{ border-left-color: #f39c12; }}
        .task-card.overdue {{ border-left-color: #e74c3c; }}
        .task-header {{ display: flex; justify-content: space-between; align-items: center; }}
        .task-title {{ font-size: 1.2em; font-weight: 600; color: #333; }}
        .notice {{
            background: #e74c3c;
            color: white;
            font-size: 0.7em;
            padding: 3px 8px;
            border-radius: 10px;
            margin-left: 10px;
        }}
        .notice.warning {{ background: #f39c12; }}
        .category-badge {{
            background: #eef;
            color: #667eea;
            padding: 4px 12px;
            border-radius: 12px;
            font-size: 0.85em;
        }}
        .task-description {{ color: #666; margin-top: 10px; }}
        .task-footer {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-top: 15px;
        }}
        .due-date {{ color: #888; }}
        .btn-done {{
            background: #2ecc71;
            color: white;
            border: none;
            padding: 8px 16px;
            border-radius: 5px;
            cursor: pointer;
        }}
        .empty-state {{
            background: white;
            border-radius: 10px;
            padding: 40px;
            text-align: center;
            color: #888;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>&#128218; Assignment Tracker</h1>

        <div class="user-header">
            <div>Welcome, <strong>{username}</strong></div>
            <form method="POST" action="/logout">
                <button type="submit" class="btn-logout">Logout</button>
            </form>
        </div>

        <div class="form-container">
            <h2>Add New Item</h2>
            <form method="POST" action="/add">
                <div class="form-group">
                    <label for="title">Title:</label>
                    <input type="text" id="title" name="title" required>
                </div>
                <div class="form-group">
                    <label for="description">Description:</label>
                    <textarea id="description" name="description"></textarea>
                </div>
                <div class="form-group">
                    <label for="category">Category:</label>
                    <select id="category" name="category" required>
                        <option value="Assignment">Assignment</option>
                        <option value="Exam">Exam</option>
                        <option value="Quiz">Quiz</option>
                        <option value="Meeting">Meeting</option>
                        <option value="Presentation">Presentation</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="dueDate">Due Date:</label>
                    <input type="date" id="dueDate" name="dueDate" required>
                </div>
                <button type="submit">Add Item</button>
            </form>
        </div>

        <h2 style="color: white;">Active Items</h2>
{cards}    </div>
</body>
</html>
"#,
        username = escape(username),
    )
}
