pub fn render_dashboard(today: &str) -> String {
    DASHBOARD_HTML.replace("{{TODAY}}", today)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tracker Dashboard</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #2b2a28;
      --dark: #2f4858;
      --base: #c9d3d9;
      --light: #e4ebef;
      --accent: #ff6b4a;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      padding: 28px 18px 48px;
    }

    .app {
      max-width: 1180px;
      margin: 0 auto;
      background: var(--card);
      border: 1px solid var(--light);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 14px;
    }

    h1 { margin: 0; font-size: 1.8rem; color: var(--dark); }

    .badge {
      background: var(--light);
      border: 1px solid var(--base);
      color: var(--dark);
      border-radius: 8px;
      padding: 9px 14px;
      font-weight: 700;
      font-size: 0.85rem;
    }

    a.nav-link {
      color: var(--dark);
      font-weight: 700;
      text-decoration: none;
      border: 1px solid var(--base);
      border-radius: 8px;
      padding: 9px 14px;
    }

    a.nav-link:hover { background: var(--light); }

    form.add {
      display: flex;
      gap: 10px;
    }

    form.add input {
      flex: 1;
      border: 1px solid var(--base);
      border-radius: 8px;
      padding: 10px 14px;
      font-size: 0.95rem;
      background: var(--bg);
      outline: none;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      font-weight: 700;
      font-size: 0.85rem;
      cursor: pointer;
      background: var(--dark);
      color: white;
    }

    button:active { transform: scale(0.97); }

    .controls {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 12px;
    }

    .tabs, .pager { display: flex; gap: 6px; }

    .tab {
      background: var(--bg);
      color: var(--dark);
      border: 1px solid var(--base);
      text-transform: uppercase;
      font-size: 0.75rem;
    }

    .tab.active { background: var(--dark); color: white; }

    .pager button { background: var(--bg); color: var(--dark); border: 1px solid var(--base); }

    .grid-wrap { overflow-x: auto; border: 1px solid var(--light); border-radius: 12px; }

    table { border-collapse: collapse; width: 100%; white-space: nowrap; font-size: 0.85rem; }

    th, td { padding: 8px 10px; text-align: center; border-top: 1px solid var(--light); }

    th.target, td.target {
      text-align: left;
      position: sticky;
      left: 0;
      background: var(--card);
      font-weight: 700;
      color: var(--dark);
      max-width: 220px;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    th.day { color: #9aa3a9; font-weight: 600; font-size: 0.7rem; }
    th.day.today { color: var(--dark); background: var(--light); }

    .cell {
      width: 26px;
      height: 26px;
      padding: 0;
      border-radius: 6px;
      background: var(--bg);
      border: 1px solid var(--base);
      color: white;
      font-size: 0.8rem;
      line-height: 1;
    }

    .cell.done { background: var(--dark); border-color: var(--dark); }

    td.actions button {
      background: transparent;
      color: var(--dark);
      padding: 4px 6px;
      font-size: 0.8rem;
    }

    td.actions button.delete { color: var(--accent); }

    .status { min-height: 1.2em; font-size: 0.9rem; color: #6b645d; }
    .status[data-type="error"] { color: #c63b2b; }

    .empty { color: #8b857d; padding: 18px; text-align: center; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Tracker Dashboard</h1>
        <span class="badge">Today: {{TODAY}}</span>
      </div>
      <div style="display:flex; gap:10px; align-items:center;">
        <span class="badge" id="streak">Current Streak: 0 Days</span>
        <a class="nav-link" href="/history">History</a>
      </div>
    </header>

    <form class="add" method="post" action="/targets/add">
      <input type="text" name="name" placeholder="New target..." required />
      <button type="submit">Add Target</button>
    </form>

    <section class="controls">
      <div class="tabs" id="tabs"></div>
      <div class="pager" id="pager">
        <button type="button" id="prev">&lsaquo; Prev</button>
        <button type="button" id="now">Today</button>
        <button type="button" id="next">Next &rsaquo;</button>
      </div>
    </section>

    <div class="grid-wrap">
      <table>
        <thead id="grid-head"></thead>
        <tbody id="grid-body"></tbody>
      </table>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const VIEWS = ['week', 'month', 'year', 'all'];
    const MONTHS = ['JAN', 'FEB', 'MAR', 'APR', 'MAY', 'JUN', 'JUL', 'AUG', 'SEP', 'OCT', 'NOV', 'DEC'];

    const params = new URLSearchParams(window.location.search);
    let view = VIEWS.includes(params.get('view')) ? params.get('view') : 'month';
    let offset = parseInt(params.get('offset') || '0', 10) || 0;
    let board = null;

    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const navigate = () => {
      const qs = new URLSearchParams({ view, offset: String(offset) });
      history.replaceState(null, '', `/?${qs}`);
      load().catch((err) => setStatus(err.message, 'error'));
    };

    const renderTabs = () => {
      document.getElementById('tabs').innerHTML = VIEWS
        .map((v) => `<button type="button" class="tab${v === view ? ' active' : ''}" data-view="${v}">${v}</button>`)
        .join('');
      document.querySelectorAll('.tab').forEach((tab) => {
        tab.addEventListener('click', () => {
          view = tab.dataset.view;
          offset = 0;
          navigate();
        });
      });
      document.getElementById('pager').style.visibility = view === 'all' ? 'hidden' : 'visible';
    };

    const dayLabel = (key) => {
      const month = MONTHS[parseInt(key.slice(5, 7), 10) - 1];
      return `${month}<br>${key.slice(8)}`;
    };

    const renderGrid = () => {
      const head = document.getElementById('grid-head');
      const body = document.getElementById('grid-body');

      const dayCells = board.days
        .map((d) => `<th class="day${d === board.today ? ' today' : ''}">${dayLabel(d)}</th>`)
        .join('');
      head.innerHTML = `<tr><th class="target">Target</th>${dayCells}<th>Action</th></tr>`;

      if (!board.targets.length) {
        body.innerHTML = `<tr><td class="empty" colspan="${board.days.length + 2}">No targets yet.</td></tr>`;
        return;
      }

      body.innerHTML = board.targets.map((target) => {
        const cells = board.days.map((day, i) => {
          const done = target.done[i];
          return `<td><button type="button" class="cell${done ? ' done' : ''}" data-id="${target.id}" data-day="${day}" data-done="${done}">${done ? '&check;' : ''}</button></td>`;
        }).join('');
        return `<tr>
          <td class="target" title="${target.name}">${target.name}</td>
          ${cells}
          <td class="actions">
            <button type="button" class="edit" data-id="${target.id}" data-name="${target.name}">Edit</button>
            <button type="button" class="delete" data-id="${target.id}">Delete</button>
          </td>
        </tr>`;
      }).join('');

      document.querySelectorAll('.cell').forEach((cell) => {
        cell.addEventListener('click', () => toggle(cell).catch((err) => setStatus(err.message, 'error')));
      });
      document.querySelectorAll('.edit').forEach((btn) => {
        btn.addEventListener('click', () => rename(btn).catch((err) => setStatus(err.message, 'error')));
      });
      document.querySelectorAll('.delete').forEach((btn) => {
        btn.addEventListener('click', () => remove(btn).catch((err) => setStatus(err.message, 'error')));
      });
    };

    const load = async () => {
      const res = await fetch(`/api/dashboard?view=${view}&offset=${offset}`);
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      board = await res.json();
      document.getElementById('streak').textContent = `Current Streak: ${board.streak} Days`;
      renderTabs();
      renderGrid();
    };

    const toggle = async (cell) => {
      const res = await fetch('/api/logs', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          habit_id: Number(cell.dataset.id),
          date: cell.dataset.day,
          completed: cell.dataset.done !== 'true'
        })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      await load();
    };

    const rename = async (btn) => {
      const name = window.prompt('Rename target', btn.dataset.name);
      if (name === null) {
        return;
      }
      const res = await fetch(`/api/targets/${btn.dataset.id}`, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      await load();
    };

    const remove = async (btn) => {
      if (!window.confirm('Delete this target and all of its logs?')) {
        return;
      }
      const res = await fetch(`/api/targets/${btn.dataset.id}`, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      await load();
    };

    document.getElementById('prev').addEventListener('click', () => {
      offset -= board ? board.days.length : 30;
      navigate();
    });
    document.getElementById('now').addEventListener('click', () => {
      offset = 0;
      navigate();
    });
    document.getElementById('next').addEventListener('click', () => {
      offset += board ? board.days.length : 30;
      navigate();
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

pub const HISTORY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Administrative History</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #2b2a28;
      --dark: #2f4858;
      --base: #c9d3d9;
      --light: #e4ebef;
      --accent: #ff6b4a;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(47, 72, 88, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      padding: 28px 18px 48px;
    }

    .card {
      max-width: 980px;
      margin: 0 auto;
      background: var(--card);
      border: 1px solid var(--light);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    .lock {
      max-width: 420px;
      text-align: center;
    }

    h1 { margin: 0; font-size: 1.7rem; color: var(--dark); }
    h2 { margin: 0 0 10px; font-size: 1.1rem; color: var(--dark); }

    a.back { color: var(--dark); font-weight: 700; text-decoration: none; }
    a.back:hover { text-decoration: underline; }

    input, button {
      border-radius: 8px;
      padding: 10px 14px;
      font-size: 0.9rem;
    }

    input {
      border: 1px solid var(--base);
      background: var(--bg);
      outline: none;
      width: 100%;
    }

    input.bad { border-color: #c63b2b; }

    button {
      appearance: none;
      border: none;
      font-weight: 700;
      cursor: pointer;
      background: var(--dark);
      color: white;
    }

    button:active { transform: scale(0.97); }

    button.export { background: #2d7a4b; }

    .tabs { display: flex; gap: 6px; flex-wrap: wrap; }

    .tab {
      background: var(--bg);
      color: var(--dark);
      border: 1px solid var(--base);
      text-transform: uppercase;
      font-size: 0.75rem;
    }

    .tab.active { background: var(--dark); color: white; }

    .filters {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      gap: 10px;
      background: var(--bg);
      border: 1px solid var(--light);
      border-radius: 12px;
      padding: 14px;
    }

    .filters label {
      display: block;
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      color: var(--dark);
      margin-bottom: 4px;
    }

    .filters .field { flex: 1; min-width: 140px; }

    .miss-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 10px;
    }

    .miss {
      display: flex;
      justify-content: space-between;
      align-items: center;
      border: 1px solid var(--base);
      border-radius: 10px;
      padding: 12px 14px;
    }

    .miss .count {
      background: #fdecea;
      color: #c63b2b;
      border: 1px solid #f5c6c0;
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.75rem;
      font-weight: 700;
      white-space: nowrap;
    }

    .table-wrap {
      border: 1px solid var(--light);
      border-radius: 12px;
      max-height: 420px;
      overflow: auto;
    }

    table { border-collapse: collapse; width: 100%; font-size: 0.85rem; }

    th {
      position: sticky;
      top: 0;
      background: var(--light);
      color: var(--dark);
      text-align: left;
      padding: 10px 14px;
    }

    td { padding: 9px 14px; border-top: 1px solid var(--light); }

    .pill {
      display: inline-block;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
    }

    .pill.done { background: #e7f5ec; color: #2d7a4b; border: 1px solid #bfe3cc; }
    .pill.missed { background: #fdecea; color: #c63b2b; border: 1px solid #f5c6c0; }

    .error { color: #c63b2b; font-size: 0.85rem; font-weight: 700; min-height: 1.2em; }
  </style>
</head>
<body>
  <main class="card lock" id="lock">
    <h1>Admin Access</h1>
    <p>Enter the access key to open the history report.</p>
    <form id="unlock-form" style="display:grid; gap:10px;">
      <input type="password" id="key-input" placeholder="Access key..." autofocus />
      <div class="error" id="lock-error"></div>
      <button type="submit">Unlock History</button>
      <a class="back" href="/">&larr; Back to dashboard</a>
    </form>
  </main>

  <main class="card" id="report" hidden>
    <header style="display:flex; flex-wrap:wrap; justify-content:space-between; gap:12px; align-items:center;">
      <div>
        <a class="back" href="/">&larr; Dashboard</a>
        <h1>Administrative History</h1>
      </div>
      <button type="button" class="export" id="export">Export XLSX</button>
    </header>

    <section class="tabs" id="tabs"></section>

    <form class="filters" id="filter-form">
      <div class="field">
        <label for="from">From</label>
        <input type="date" id="from" name="from" />
      </div>
      <div class="field">
        <label for="to">To</label>
        <input type="date" id="to" name="to" />
      </div>
      <button type="submit">Filter</button>
    </form>

    <section>
      <h2>Missed Per Category</h2>
      <div class="miss-grid" id="misses"></div>
    </section>

    <section>
      <h2>Detailed Logs</h2>
      <div class="table-wrap">
        <table>
          <thead>
            <tr><th>Date</th><th>Target</th><th>Status</th></tr>
          </thead>
          <tbody id="records"></tbody>
        </table>
      </div>
    </section>

    <div class="error" id="report-error"></div>
  </main>

  <script>
    const VIEWS = ['week', 'month', 'year', 'all'];

    let accessKey = '';
    let view = 'month';
    let from = '';
    let to = '';

    const lockEl = document.getElementById('lock');
    const reportEl = document.getElementById('report');

    const query = () => {
      const qs = new URLSearchParams({ view });
      if (from) qs.set('from', from);
      if (to) qs.set('to', to);
      return qs;
    };

    const renderTabs = () => {
      document.getElementById('tabs').innerHTML = VIEWS
        .map((v) => `<button type="button" class="tab${v === view ? ' active' : ''}" data-view="${v}">${v}</button>`)
        .join('');
      document.querySelectorAll('.tab').forEach((tab) => {
        tab.addEventListener('click', () => {
          view = tab.dataset.view;
          load().catch(showError);
        });
      });
    };

    const render = (data) => {
      renderTabs();

      document.getElementById('misses').innerHTML = data.misses.length
        ? data.misses.map((m) => `<div class="miss"><span>${m.name}</span><span class="count">${m.count} Miss</span></div>`).join('')
        : '<p>No targets tracked yet.</p>';

      document.getElementById('records').innerHTML = data.records
        .map((r) => `<tr>
            <td>${r.Date}</td>
            <td>${r.Target}</td>
            <td><span class="pill ${r.Status === 'Done' ? 'done' : 'missed'}">${r.Status}</span></td>
          </tr>`)
        .join('');
    };

    const showError = (err) => {
      document.getElementById('report-error').textContent = err.message;
    };

    const load = async () => {
      const res = await fetch(`/api/history?${query()}`, {
        headers: { 'x-access-key': accessKey }
      });
      if (res.status === 401) {
        throw new Error('unauthorized');
      }
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load history');
      }
      document.getElementById('report-error').textContent = '';
      render(await res.json());
    };

    document.getElementById('unlock-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('key-input');
      accessKey = input.value;
      load()
        .then(() => {
          lockEl.hidden = true;
          reportEl.hidden = false;
        })
        .catch(() => {
          input.classList.add('bad');
          document.getElementById('lock-error').textContent = 'Wrong access key.';
        });
    });

    document.getElementById('filter-form').addEventListener('submit', (event) => {
      event.preventDefault();
      from = document.getElementById('from').value;
      to = document.getElementById('to').value;
      load().catch(showError);
    });

    document.getElementById('export').addEventListener('click', () => {
      const qs = query();
      qs.set('key', accessKey);
      window.location.href = `/api/history/export?${qs}`;
    });
  </script>
</body>
</html>
"#;
