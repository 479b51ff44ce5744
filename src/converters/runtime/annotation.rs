//! Freehand drawing over the live deck.
//!
//! The overlay is a full-viewport canvas toggled with the `D` key. Strokes
//! are bucketed per reveal step, keyed by `"{h}.{v}:{visibleFragments}"`, so
//! every step has its own drawing layer. Saving and loading are explicit
//! actions against `localStorage`; nothing is persisted automatically.

use std::fmt::Write;

use crate::errors::Result;

/// Key that shows the menu and enables drawing, or hides both.
pub const TOGGLE_KEY: char = 'D';

/// Pen colors offered in the menu. The first one is selected initially.
pub const COLORS: [&str; 5] = ["#ff2d2d", "#2d7dff", "#2dff7a", "#ffd52d", "#000000"];

/// Label shown in the menu while drawing is disabled.
pub const OFF_LABEL: &str = "OFF";

/// A drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Highlighter,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pen, Tool::Highlighter, Tool::Eraser];

    /// Identifier used in the generated script and for the menu button.
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Highlighter => "highlighter",
            Tool::Eraser => "eraser",
        }
    }

    pub fn button_text(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Highlighter => "Highlighter",
            Tool::Eraser => "Eraser",
        }
    }

    /// Mode label shown in the menu while the tool is active.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "PEN",
            Tool::Highlighter => "HIGHLIGHT",
            Tool::Eraser => "ERASER",
        }
    }

    /// Stroke width in CSS pixels.
    pub fn width(self) -> u32 {
        match self {
            Tool::Pen => 4,
            Tool::Highlighter => 22,
            Tool::Eraser => 18,
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            Tool::Highlighter => 0.25,
            Tool::Pen | Tool::Eraser => 1.0,
        }
    }

    /// Canvas compositing used for the stroke; the eraser punches holes.
    pub fn composite(self) -> &'static str {
        match self {
            Tool::Eraser => "destination-out",
            Tool::Pen | Tool::Highlighter => "source-over",
        }
    }
}

/// Writes the overlay runtime, storing saved strokes under `storage_key`.
pub fn write_runtime(storage_key: &str, out: &mut String) -> Result<()> {
    writeln!(out, "// Live slide annotations, toggled with {}", TOGGLE_KEY)?;
    writeln!(out, "(function () {{")?;
    writeln!(out, "  type Pt = {{ x: number; y: number }};")?;
    writeln!(out, "  type Stroke = {{ p: Pt[]; c: string; w: number; a: number; op: string }};")?;
    writeln!(out, "  type Tool = {};", quoted_union(Tool::ALL.iter().map(|t| t.as_str())))?;
    writeln!(out)?;
    writeln!(out, "  const KEY = {:?};", storage_key)?;
    writeln!(
        out,
        "  const COLORS = [{}];",
        COLORS.iter().map(|c| format!("{:?}", c)).collect::<Vec<_>>().join(", ")
    )?;
    writeln!(out, "  const OFF = {:?};", OFF_LABEL)?;
    writeln!(
        out,
        "  const TOOLS: Record<Tool, {{ w: number; a: number; op: string; label: string; text: string }}> = {{"
    )?;
    for tool in Tool::ALL {
        writeln!(
            out,
            "    {}: {{ w: {}, a: {}, op: {:?}, label: {:?}, text: {:?} }},",
            tool.as_str(),
            tool.width(),
            tool.alpha(),
            tool.composite(),
            tool.label(),
            tool.button_text()
        )?;
    }
    writeln!(out, "  }};")?;
    writeln!(
        out,
        "  const TOGGLE = [{:?}, {:?}];",
        TOGGLE_KEY.to_ascii_lowercase().to_string(),
        TOGGLE_KEY.to_string()
    )?;
    writeln!(out)?;
    writeln!(out, "  let enabled = false, drawing = false;")?;
    writeln!(out, "  let tool: Tool = {:?};", Tool::default().as_str())?;
    writeln!(out, "  let color = COLORS[0];")?;
    out.push_str(RUNTIME_BODY);
    writeln!(out, "}})();")?;
    Ok(())
}

fn quoted_union<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|n| format!("{:?}", n))
        .collect::<Vec<_>>()
        .join(" | ")
}

const RUNTIME_BODY: &str = r##"
  const mem = new Map<string, Stroke[]>();
  let cur: Stroke | null = null;

  const root = document.querySelector(".reveal");
  if (!root) return;

  const canvas = document.createElement("canvas");
  canvas.style.position = "fixed";
  canvas.style.inset = "0";
  canvas.style.zIndex = "9999";
  canvas.style.pointerEvents = "none";
  root.appendChild(canvas);

  const ctx = canvas.getContext("2d");
  if (!ctx) return;

  const flash = (m: string) => {
    const el = document.createElement("div");
    el.textContent = m;
    el.style.cssText =
      "position:fixed;top:12px;left:12px;z-index:10001;padding:6px 10px;" +
      "background:rgba(0,0,0,.6);color:#fff;border-radius:8px;font:12px system-ui";
    document.body.appendChild(el);
    setTimeout(() => el.remove(), 700);
  };

  const bucketKey = () => {
    const i = Reveal.getIndices();
    const s = Reveal.getCurrentSlide();
    const visible = s ? s.querySelectorAll(".fragment.visible").length : 0;
    return String(i.h ?? 0) + "." + String(i.v ?? 0) + ":" + String(visible);
  };

  const bucket = () => {
    const k = bucketKey();
    if (!mem.has(k)) mem.set(k, []);
    return mem.get(k) as Stroke[];
  };

  const redraw = () => {
    ctx.clearRect(0, 0, canvas.width, canvas.height);
    ctx.lineCap = "round";
    ctx.lineJoin = "round";
    for (const s of bucket()) {
      if (s.p.length < 2) continue;
      ctx.save();
      ctx.globalCompositeOperation = s.op as GlobalCompositeOperation;
      ctx.globalAlpha = s.a;
      ctx.strokeStyle = s.c;
      ctx.lineWidth = s.w;
      ctx.beginPath();
      ctx.moveTo(s.p[0].x, s.p[0].y);
      for (let i = 1; i < s.p.length; i++) ctx.lineTo(s.p[i].x, s.p[i].y);
      ctx.stroke();
      ctx.restore();
    }
  };

  const resize = () => { canvas.width = innerWidth; canvas.height = innerHeight; redraw(); };

  const readStore = () => {
    try { return JSON.parse(localStorage.getItem(KEY) || "{}"); } catch { return {}; }
  };

  const save = () => {
    const d: any = readStore();
    d[bucketKey()] = bucket();
    localStorage.setItem(KEY, JSON.stringify(d));
    flash("Saved");
  };

  const load = () => {
    const d: any = readStore();
    const k = bucketKey();
    mem.set(k, d[k] || []);
    redraw();
    flash(d[k] ? "Loaded" : "No saved data");
  };

  const clearStep = () => {
    mem.set(bucketKey(), []);
    redraw();
    flash("Cleared");
  };

  canvas.addEventListener("pointerdown", (e: PointerEvent) => {
    if (!enabled) return;
    drawing = true;
    const t = TOOLS[tool];
    cur = { p: [{ x: e.clientX, y: e.clientY }], c: tool === "eraser" ? "#000" : color, w: t.w, a: t.a, op: t.op };
    bucket().push(cur);
    canvas.setPointerCapture?.(e.pointerId);
  });

  canvas.addEventListener("pointermove", (e: PointerEvent) => {
    if (!enabled || !drawing || !cur) return;
    cur.p.push({ x: e.clientX, y: e.clientY });
    redraw();
  });

  addEventListener("pointerup", () => {
    drawing = false;
    cur = null;
  });

  const btnCss =
    "padding:6px 8px;border-radius:10px;border:1px solid rgba(255,255,255,.18);" +
    "background:rgba(255,255,255,.10);color:#fff;cursor:pointer";
  const activeCss = "background:rgba(255,255,255,.22);border-color:rgba(255,255,255,.35);";

  const menu = document.createElement("div");
  menu.style.cssText =
    "position:fixed;left:12px;bottom:12px;z-index:10003;padding:10px 12px;border-radius:12px;" +
    "background:rgba(0,0,0,.60);color:#fff;font:12px system-ui;user-select:none;" +
    "display:none;min-width:260px";

  const header = document.createElement("div");
  header.style.cssText = "display:flex;justify-content:space-between;gap:10px;margin-bottom:8px;";
  header.innerHTML = '<div style="font-weight:700">Slide annotations</div>';
  const stateEl = document.createElement("div");
  stateEl.textContent = OFF;
  header.appendChild(stateEl);
  menu.appendChild(header);

  const row = () => {
    const r = document.createElement("div");
    r.style.cssText = "display:flex;gap:8px;flex-wrap:wrap;margin-bottom:10px;";
    menu.appendChild(r);
    return r;
  };

  const button = (parent: HTMLElement, text: string, onClick: () => void) => {
    const b = document.createElement("button");
    b.type = "button";
    b.textContent = text;
    b.style.cssText = btnCss;
    b.addEventListener("click", onClick);
    parent.appendChild(b);
    return b;
  };

  const toolRow = row();
  const toolButtons = new Map<Tool, HTMLButtonElement>();
  for (const t of Object.keys(TOOLS) as Tool[]) {
    toolButtons.set(t, button(toolRow, TOOLS[t].text, () => { tool = t; updateMenu(); }));
  }

  const colorRow = row();
  for (const c of COLORS) {
    const dot = button(colorRow, "", () => { color = c; updateMenu(); });
    dot.title = c;
    dot.style.cssText =
      "width:16px;height:16px;border-radius:999px;border:1px solid rgba(255,255,255,.6);" +
      "cursor:pointer;padding:0;background:" + c;
  }

  const actionRow = row();
  button(actionRow, "Clear step", clearStep);
  button(actionRow, "Save", save);
  button(actionRow, "Load", load);

  document.body.appendChild(menu);

  function updateMenu() {
    stateEl.textContent = enabled ? TOOLS[tool].label : OFF;
    toolButtons.forEach((b, t) => {
      b.style.cssText = btnCss + ";" + (enabled && t === tool ? activeCss : "");
    });
  }

  const onStepChange = () => { redraw(); updateMenu(); };
  Reveal.on("slidechanged", onStepChange);
  Reveal.on("fragmentshown", onStepChange);
  Reveal.on("fragmenthidden", onStepChange);

  addEventListener("keydown", (e: KeyboardEvent) => {
    if (!TOGGLE.includes(e.key)) return;
    e.preventDefault();
    e.stopPropagation();
    enabled = !enabled;
    menu.style.display = enabled ? "block" : "none";
    canvas.style.pointerEvents = enabled ? "auto" : "none";
    updateMenu();
  }, true);

  menu.addEventListener("pointerdown", (e) => { e.stopPropagation(); });
  menu.addEventListener("click", (e) => { e.stopPropagation(); });

  addEventListener("resize", resize);
  resize();
  updateMenu();
"##;
