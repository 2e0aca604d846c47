//! Default prompt texts. Any of these can be replaced through
//! [`Registry::merge`](super::Registry::merge) without touching the search.

pub const BLOTTO_AGENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the game state above, any earlier games between you and the opponent, and the moves made so far, enumerate the distinct allocations you could play next that give you the best chance to win.

- Reason step by step inside <think> </think> tags.
- Then write every distinct candidate allocation in its own <action> </action> tag.
- Spread the candidates out so that distant corners of the allocation space are explored.
- If you would rather wait, output <action>pass</action>.

Output format:
<think> ...reasoning... </think>
<action> ... </action>
<action> ... </action>

Example:
<action>
[A6 B7 C7]
</action>
<action>
[A10 B0 C10]
</action>
";

pub const BLOTTO_OPPONENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the game state above, any earlier games and the moves made so far, enumerate the distinct allocations the opponent could play next.

- Reason from the opponent's point of view inside <think> </think> tags.
- Then write every distinct opponent allocation in its own <opponent_action> </opponent_action> tag.
- Spread the candidates out so that distant corners of the allocation space are explored.
- If the opponent might wait, include <opponent_action>pass</opponent_action>.

Output format:
<think> ...reasoning... </think>
<opponent_action> ... </opponent_action>
<opponent_action> ... </opponent_action>

Example:
<opponent_action>
[A4 B8 C8]
</opponent_action>
<opponent_action>
[A10 B10 C0]
</opponent_action>
";

pub const PRISONERS_AGENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the game state, earlier rounds against your two opponents and the moves made so far, list the distinct moves you could make next that lead toward a win.

- Reason inside <think> </think> tags.
- Then write each distinct move in its own <action> </action> tag.
- Keep the moves diverse.
- If you would rather wait, output <action>pass</action>.

During a free conversation round, each action is a message to the other players.
During a decision round, use the form <action>[pid action] [pid action]</action>, for example:
<action>
[0 cooperate] [2 defect]
</action>
<action>
[0 defect] [2 defect]
</action>
";

pub const PRISONERS_OPPONENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the game state, earlier rounds and the moves made so far, list what your two opponents could do next.

- Identify the opponents' player ids, then reason about their choices inside <think> </think> tags.
- Describe each scenario, covering both opponents, in its own <opponent_action> </opponent_action> tag.
- Keep the scenarios diverse.
- If the opponents might wait, include <opponent_action>pass</opponent_action>.

Example:
<opponent_action>
Player 0 cooperates with Player 1 and defects against Player 2. Player 2 cooperates with Player 0 but defects against Player 1.
</opponent_action>
";

pub const CODENAMES_AGENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the board and the moves made so far, list the distinct moves you could make next.

- As spymaster, never give a clue that matches or is contained in a word on the board.
- Choose clues that avoid opponent words, neutral words and the assassin.
- As guesser, only guess words that are on the board.
- Reason inside <think> </think> tags, then write each distinct move in its own <action> </action> tag.
- If you would rather wait, output <action>pass</action>.

Example:
<action>
[fire 2]
</action>
<action>
[rice, grain]
</action>
";

pub const CODENAMES_OPPONENT: &str = "
<game>
{game_state}
</game>

{prior_actions}

Given the board and the moves made so far, list the distinct moves the opposing spymaster could make next.

- Reason inside <think> </think> tags.
- Their clues never match or sit inside a word on the board, and avoid their opponent's words, neutral words and the assassin.
- Write each distinct opponent move in its own <opponent_action> </opponent_action> tag.
- If the opponent might wait, include <opponent_action>pass</opponent_action>.

Example:
<opponent_action>
[cloud 1]
</opponent_action>
";

pub const GENERIC_AGENT: &str = "You are playing a game. Given the current game state and the moves made so far (if any), list the distinct moves you could make next.

- Reason inside <think> </think> tags.
- Then write each distinct move in its own <action> </action> tag, most promising first.
- Keep the moves diverse so the search covers the space well.
- If you would rather wait, output <action>pass</action>.

Input:
<game_state>{game_state}</game_state>
<prior_actions>{prior_actions}</prior_actions>

Output format:
<think> ...reasoning... </think>
<action> ... </action>
<action> ... </action>
";

pub const GENERIC_OPPONENT: &str = "You are simulating your opponent. Given the current game state, the moves made so far and your own last move (if any), list the distinct moves the opponent could make next.

- Reason inside <think> </think> tags.
- Then write each distinct opponent move in its own <opponent_action> </opponent_action> tag, most likely first.
- If the opponent might wait, include <opponent_action>pass</opponent_action>.

Input:
game_state: {game_state}
prior_actions: {prior_actions}
last_move_by_you: {last_move}

Output format:
<think> ...reasoning... </think>
<opponent_action> ... </opponent_action>
<opponent_action> ... </opponent_action>
";

pub const PAIRWISE: &str = "You are comparing two simulated futures that start from the same base state.
Decide which future is more likely to end with a higher final reward for the player whose moves appear in <action> </action> tags. Skip any future that is missing information. Assume rational opponents and standard play unless a future shows otherwise.

<base_game_state>
{base_state}
</base_game_state>

<future_1>
{future_1}
</future_1>

<future_2>
{future_2}
</future_2>

Output:
1) Brief reasoning in <think>…</think>
2) Exactly one choice, [[1]] or [[2]], naming the future you prefer. If they are equal, output [[tie]].
";

pub const MULTIWAY: &str = "You are evaluating several simulated futures that all start from the same base state. Decide which future is most likely to lead to victory for your side.

<base_game_state>
{base_state}
</base_game_state>

<futures>
{futures_blocks}
</futures>

Output:
1. Your reasoning in <think>…</think>
2. Exactly one chosen future as [[index]], using the 1-based index of its block. For example, [[4]].
";
