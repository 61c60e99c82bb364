pub const WIDGET_STYLES: &str = r#"
/* Shared widget layout */
.widget {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    height: 100%;
    padding: 0.9rem;
    color: var(--text-primary, #f8fafc);
    font-size: 0.875rem;
}

.widget-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    flex-wrap: wrap;
}

.widget-grow {
    flex: 1;
    min-width: 0;
}

.widget-input,
.widget-select,
.widget-textarea {
    padding: 0.45rem 0.6rem;
    background: var(--input-bg, #0f172a);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #334155);
    border-radius: var(--radius-sm, 4px);
    font: inherit;
    outline: none;
}

.widget-input:focus,
.widget-select:focus,
.widget-textarea:focus {
    border-color: var(--accent-bg, #3b82f6);
}

.widget-textarea {
    resize: none;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.8rem;
    line-height: 1.45;
}

.widget-btn {
    padding: 0.4rem 0.75rem;
    background: var(--window-bg, #1e293b);
    color: var(--text-primary, #f8fafc);
    border: 1px solid var(--border-color, #334155);
    border-radius: var(--radius-sm, 4px);
    cursor: pointer;
    font: inherit;
    white-space: nowrap;
}

.widget-btn:hover:not(:disabled) {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.widget-btn:disabled {
    opacity: 0.5;
    cursor: default;
}

.widget-btn.primary {
    background: var(--accent-bg, #3b82f6);
    border-color: var(--accent-bg, #3b82f6);
    color: var(--accent-text, #ffffff);
}

.widget-btn.danger {
    color: var(--danger-text, #ef4444);
}

.widget-btn.icon {
    padding: 0.2rem 0.45rem;
    background: transparent;
    border-color: transparent;
}

.widget-btn.selected {
    border-color: var(--accent-bg, #3b82f6);
    color: var(--accent-bg, #3b82f6);
}

.widget-muted {
    color: var(--text-muted, #64748b);
    font-size: 0.8rem;
}

.widget-error {
    color: var(--danger-text, #ef4444);
    font-size: 0.8rem;
}

.widget-list {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
    margin: 0;
    padding: 0;
    list-style: none;
    overflow-y: auto;
}

.widget-card {
    padding: 0.6rem 0.7rem;
    background: var(--bg-primary, #0f172a);
    border: 1px solid var(--border-color, #334155);
    border-radius: var(--radius-md, 8px);
}

.widget-stat {
    font-size: 2rem;
    font-weight: 600;
    font-variant-numeric: tabular-nums;
}

.widget-mono {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    word-break: break-all;
}

.widget-progress {
    height: 6px;
    background: var(--border-color, #334155);
    border-radius: 999px;
    overflow: hidden;
}

.widget-progress > div {
    height: 100%;
    background: var(--accent-bg, #3b82f6);
    transition: width 0.3s linear;
}

/* Kanban */
.kanban-board {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 0.75rem;
    flex: 1;
    min-height: 0;
}

.kanban-column {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    min-height: 0;
    padding: 0.5rem;
    background: color-mix(in srgb, var(--window-bg, #1e293b) 70%, #000 30%);
    border-radius: var(--radius-md, 8px);
}

.kanban-column.drop-target {
    outline: 2px dashed var(--accent-bg, #3b82f6);
}

/* Habits */
.habit-day {
    width: 1.6rem;
    height: 1.6rem;
    border-radius: 999px;
    border: 1px solid var(--border-color, #334155);
    background: transparent;
    color: var(--text-muted, #64748b);
    cursor: pointer;
    font-size: 0.7rem;
}

.habit-day.done {
    background: var(--success-bg, #10b981);
    border-color: var(--success-bg, #10b981);
    color: #ffffff;
}

/* Mixer */
.mixer-channel input[type="range"] {
    flex: 1;
}

@media (max-width: 640px) {
    .kanban-board {
        grid-template-columns: 1fr;
    }
}
"#;
