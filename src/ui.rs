//! Terminal rendering. Reads a [`MatchState`] and a [`Scene`]; never touches
//! the engine directly.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::{
    engine::{MatchState, Phase, Scene},
    event::Side,
    game_theme::{GameTheme, ThemeColors},
    helpers::{centered_in, centered_rect, court_to_cells},
};

const APP_NAME: &str = "terminal.pong";

const MENU_OPTIONS: [&str; 4] = [
    "Press 3 for Best of 3",
    "Press 5 for Best of 5",
    "Press 7 for Best of 7",
    "Press ESC to Exit",
];

pub fn draw(frame: &mut Frame, state: &MatchState, scene: &Scene, theme: GameTheme) {
    let colors = theme.colors();
    let [court_area, controls_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(frame.area());

    let block = Block::default()
        .title(block_title(state, court_area.width))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().fg(colors.border).bg(colors.background))
        .title_alignment(Alignment::Center);
    let inner = block.inner(court_area);
    frame.render_widget(block, court_area);
    // Cells not written this frame would otherwise keep stale ball/paddle glyphs.
    frame.render_widget(Clear, inner);

    match state.phase {
        Phase::Playing | Phase::Exited => {
            draw_court(frame, inner, state, scene, &colors);
            if state.paused {
                draw_pause_popup(frame, theme);
            }
        }
        Phase::GameOver { winner, .. } => draw_winner(frame, inner, state, winner, &colors),
        Phase::ReplayMenu => draw_replay_menu(frame, inner, &colors),
    }

    let controls_text = match state.phase {
        Phase::ReplayMenu => " 3 / 5 / 7 = choose match length  |  Esc = Quit ",
        _ => " W/↑ = up  S/↓ = down  |  P = Pause  |  Esc = Quit ",
    };
    let controls = Paragraph::new(controls_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(controls, controls_area);
}

fn block_title(state: &MatchState, width: u16) -> String {
    let left = format!("Player ({})", state.player_score);
    let right = format!("({}) AI", state.ai_score);
    let middle = format!("{} · best of {}", APP_NAME, state.match_length.games());

    let used = left.chars().count() + middle.chars().count() + right.chars().count() + 6;
    // Two border cells are not available to the title.
    let dashes = (width as usize).saturating_sub(used + 2) / 2;

    format!(
        " {} {} {} {} {} ",
        left,
        "─".repeat(dashes),
        middle,
        "─".repeat(dashes),
        right,
    )
}

fn draw_court(frame: &mut Frame, area: Rect, state: &MatchState, scene: &Scene, colors: &ThemeColors) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let divider_area = Rect::new(area.x + area.width / 2, area.y, 1, area.height);
    let divider = Paragraph::new(vec![Line::from("╎"); area.height as usize])
        .style(Style::default().fg(colors.divider));
    frame.render_widget(divider, divider_area);

    let score_style = Style::default().fg(colors.text).bold();
    for (score, col) in [
        (state.player_score, area.width / 4),
        (state.ai_score, area.width * 3 / 4),
    ] {
        let text = score.to_string();
        let score_area = Rect::new(area.x + col, area.y + 1, text.len() as u16, 1)
            .intersection(area);
        frame.render_widget(Paragraph::new(text).style(score_style), score_area);
    }

    for paddle in [scene.player, scene.ai] {
        let cells = court_to_cells(&paddle, scene.court_width, scene.court_height, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.paddle)),
            cells,
        );
    }

    let ball = court_to_cells(&scene.ball, scene.court_width, scene.court_height, area);
    let ball = Rect::new(ball.x, ball.y, 1, 1);
    frame.render_widget(
        Paragraph::new("●").style(Style::default().fg(colors.ball)),
        ball,
    );
}

fn draw_winner(frame: &mut Frame, area: Rect, state: &MatchState, winner: Side, colors: &ThemeColors) {
    let text = match winner {
        Side::Player => "Player Wins!",
        Side::Ai => "AI Wins!",
    };

    let [banner_area, score_area] = Layout::vertical([Constraint::Length(4), Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);

    let banner = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(colors.accent))
        .lines(vec![text.into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(banner, banner_area);

    let score = Paragraph::new(format!("\n{} - {}", state.player_score, state.ai_score))
        .style(Style::default().fg(colors.text).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, score_area);
}

fn draw_replay_menu(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let [title_area, options_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Length(MENU_OPTIONS.len() as u16 * 2 + 2)])
            .flex(Flex::Center)
            .areas(area);

    let title = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(colors.accent))
        .lines(vec!["Rematch?".into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(title, title_area);

    let box_area = centered_in(36, options_area.height, options_area);
    let lines: Vec<Line> = MENU_OPTIONS
        .iter()
        .flat_map(|option| [Line::from(*option), Line::from("")])
        .collect();
    let options = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.text).bold())
        .alignment(Alignment::Center);
    frame.render_widget(options, box_area);
}

fn draw_pause_popup(frame: &mut Frame, theme: GameTheme) {
    let colors = theme.colors();
    let area = frame.area();
    let popup_area = centered_rect(48, 8, area.width, area.height);
    frame.render_widget(Clear, popup_area);

    let text = format!(
        "\n[P/Enter] Resume   [Esc] Quit\n[T] Theme: {}\n",
        theme.name()
    );
    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .title("Paused")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colors.accent))
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}

pub fn draw_resize_warning(frame: &mut Frame, theme: GameTheme, min_width: u16, min_height: u16) {
    let colors = theme.colors();
    let area = frame.area();
    let popup_area = centered_rect(40, 5, area.width, area.height);
    let popup = Paragraph::new(format!(
        "Terminal too small!\nPlease resize to at least {}x{}.",
        min_width, min_height
    ))
    .block(
        Block::default()
            .title("Warning")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    )
    .style(Style::default().fg(colors.ball))
    .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}
