/*!
# Introductory Tutorial for Aloha

Start the executable in a terminal. The editor shows nothing until you type.
Every line you enter goes into the line under the cursor, and the cursor
moves down. Line 1 is where a script starts.

<pre><code>&nbsp;> print 'Hello\sWorld\n
&nbsp;> run
&nbsp;  Hello World
&nbsp;    1 print 'Hello\sWorld\n
</code></pre>

Stop a running script with CTRL-C. Type CTRL-D to exit.

There is no separate memory for variables. A line is a line: it can hold a
command, or it can hold a number that other commands read and write. This
script counts to three by keeping the counter in line 10.

<pre><code>&nbsp;> let @10 1
&nbsp;> for @10 3
&nbsp;> print @10 \s
&nbsp;> next @10
&nbsp;> end
&nbsp;> run
&nbsp;  1 2 3
</code></pre>

`@10` means "line 10". When a command reads it, it gets the text of line 10
parsed in the domain of the command. When a command writes it, the result
text replaces line 10. After the run, `list` shows line 10 holding `4`.

## Labels

A line starting with a dot carries a label. Labels are collected when a
script starts and make jumps independent of line numbers.

<pre><code>&nbsp;> set 1
&nbsp;> call .greet
&nbsp;> end
&nbsp;> .greet print 'hi\n
&nbsp;> ret
&nbsp;> run
&nbsp;  hi
</code></pre>

## Where to go from here

The [first chapter](../__Chapter_1/index.html) covers operands and value
domains. The [second](../__Chapter_2/index.html) lists every command and the
[third](../__Chapter_3/index.html) the operators. Hardware commands run
against the simulated board described in
[Appendix A](../___Appendix_A/index.html).
*/
